use serde::Serialize;

use crate::domain::crm::{Deal, DealStage, DealTemperature, SaleType};
use crate::domain::foundation::Money;

/// Read-only aggregation of the deal pipeline, shaped as plain series for a
/// chart renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    /// Sum of all deal values
    pub total_value: Money,

    /// One entry per stage, in pipeline order
    pub value_by_stage: Vec<StageValue>,

    /// Deals marked hot / warm
    pub hot_value: Money,
    pub warm_value: Money,

    /// One entry per sale type
    pub value_by_sale_type: Vec<SaleTypeValue>,

    /// Deal value attributed to each product tag, highest first
    pub product_revenue: Vec<ProductRevenue>,

    pub won_deals: usize,
    pub total_deals: usize,
    pub contact_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageValue {
    pub stage: DealStage,
    pub label: &'static str,
    pub deal_count: usize,
    pub value: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleTypeValue {
    pub sale_type: SaleType,
    pub label: &'static str,
    pub value: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRevenue {
    pub product: String,
    pub value: Money,
}

impl PipelineSummary {
    pub fn from_deals(deals: &[Deal], contact_count: usize) -> Self {
        let value_by_stage = DealStage::ALL
            .iter()
            .map(|&stage| {
                let in_stage: Vec<&Deal> = deals.iter().filter(|d| d.stage == stage).collect();
                StageValue {
                    stage,
                    label: stage.label(),
                    deal_count: in_stage.len(),
                    value: in_stage.iter().map(|d| d.value).sum(),
                }
            })
            .collect();

        let value_by_sale_type = SaleType::ALL
            .iter()
            .map(|&sale_type| SaleTypeValue {
                sale_type,
                label: sale_type.label(),
                value: sum_where(deals, |d| d.sale_type == sale_type),
            })
            .collect();

        Self {
            total_value: deals.iter().map(|d| d.value).sum(),
            value_by_stage,
            hot_value: sum_where(deals, |d| d.temperature == DealTemperature::Hot),
            warm_value: sum_where(deals, |d| d.temperature == DealTemperature::Warm),
            value_by_sale_type,
            product_revenue: product_revenue(deals),
            won_deals: deals
                .iter()
                .filter(|d| d.stage == DealStage::ClosedWon)
                .count(),
            total_deals: deals.len(),
            contact_count,
        }
    }

    /// Share of deals closed as won, 0.0 for an empty pipeline.
    pub fn win_ratio(&self) -> f64 {
        if self.total_deals == 0 {
            return 0.0;
        }
        self.won_deals as f64 / self.total_deals as f64
    }
}

fn sum_where(deals: &[Deal], predicate: impl Fn(&Deal) -> bool) -> Money {
    deals.iter().filter(|d| predicate(d)).map(|d| d.value).sum()
}

// Every tag on a deal is credited with the full deal value. Ties keep
// first-seen order.
fn product_revenue(deals: &[Deal]) -> Vec<ProductRevenue> {
    let mut revenue: Vec<ProductRevenue> = Vec::new();
    for deal in deals {
        for product in &deal.products {
            match revenue.iter_mut().find(|r| &r.product == product) {
                Some(entry) => entry.value += deal.value,
                None => revenue.push(ProductRevenue {
                    product: product.clone(),
                    value: deal.value,
                }),
            }
        }
    }
    revenue.sort_by(|a, b| b.value.cmp(&a.value));
    revenue
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
