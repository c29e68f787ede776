use crate::domain::crm::{demo_deals, Deal, DealStage, DealTemperature, SaleType};
use crate::domain::dashboard::PipelineSummary;
use crate::domain::foundation::Money;

fn deals() -> Vec<Deal> {
    demo_deals().unwrap()
}

#[test]
fn test_empty_pipeline_is_all_zero() {
    let summary = PipelineSummary::from_deals(&[], 0);

    assert_eq!(summary.total_value, Money::ZERO);
    assert_eq!(summary.value_by_stage.len(), 5);
    assert!(summary.value_by_stage.iter().all(|s| s.value.is_zero()));
    assert!(summary.product_revenue.is_empty());
    assert_eq!(summary.win_ratio(), 0.0);
}

#[test]
fn test_value_by_stage_follows_pipeline_order() {
    let summary = PipelineSummary::from_deals(&deals(), 3);

    let stages: Vec<DealStage> = summary.value_by_stage.iter().map(|s| s.stage).collect();
    assert_eq!(stages, DealStage::ALL.to_vec());
    assert_eq!(summary.value_by_stage[1].value, Money::from_reais(45_000));
    assert_eq!(summary.value_by_stage[2].value, Money::from_reais(25_000));
    assert_eq!(summary.total_value, Money::from_reais(70_000));
    assert_eq!(summary.contact_count, 3);
}

#[test]
fn test_temperature_and_sale_type_totals() {
    let summary = PipelineSummary::from_deals(&deals(), 0);

    assert_eq!(summary.hot_value, Money::from_reais(45_000));
    assert_eq!(summary.warm_value, Money::from_reais(25_000));

    let upsell = summary
        .value_by_sale_type
        .iter()
        .find(|s| s.sale_type == SaleType::Upsell)
        .unwrap();
    assert_eq!(upsell.value, Money::from_reais(25_000));
    assert_eq!(upsell.label, "Upsell");
}

#[test]
fn test_product_revenue_sorted_descending() {
    let mut deals = deals();
    deals[1].products.push("Endomarketing".to_string());
    deals[1].temperature = DealTemperature::Cold;

    let summary = PipelineSummary::from_deals(&deals, 0);

    assert_eq!(summary.product_revenue[0].product, "Endomarketing");
    assert_eq!(summary.product_revenue[0].value, Money::from_reais(70_000));
    let values: Vec<Money> = summary.product_revenue.iter().map(|p| p.value).collect();
    let mut sorted = values.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(values, sorted);
    assert_eq!(summary.warm_value, Money::ZERO);
}

#[test]
fn test_win_ratio_counts_closed_won() {
    let mut deals = deals();
    deals[0].stage = DealStage::ClosedWon;

    let summary = PipelineSummary::from_deals(&deals, 0);

    assert_eq!(summary.won_deals, 1);
    assert_eq!(summary.total_deals, 2);
    assert!((summary.win_ratio() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_summary_serializes_camel_case() {
    let json = serde_json::to_string(&PipelineSummary::from_deals(&deals(), 3)).unwrap();
    assert!(json.contains("valueByStage"));
    assert!(json.contains("\"closed_won\""));
}
