//! Demo records loaded on first run when seeding is enabled.

use super::contact::{Contact, ContactStatus, JobLevel};
use super::deal::{Deal, DealStage, DealTemperature, EngagementModel, SaleType};
use super::team::{TeamMember, TeamRoster};
use crate::domain::foundation::{ContactId, DealId, Money, TeamMemberId, ValidationError};

/// Default agency roster.
pub fn default_roster() -> Result<TeamRoster, ValidationError> {
    Ok(TeamRoster::new(vec![TeamMember {
        id: TeamMemberId::new("1")?,
        name: "Estrategista Smart".to_string(),
        role: "Líder de Negócios".to_string(),
        email: "estrategista@wearesmart.com.br".to_string(),
    }]))
}

pub fn demo_contacts() -> Result<Vec<Contact>, ValidationError> {
    let contact = |id: &str,
                   name: &str,
                   company: &str,
                   email: &str,
                   phone: &str,
                   last_contact: &str,
                   status: ContactStatus,
                   job_level: JobLevel|
     -> Result<Contact, ValidationError> {
        Ok(Contact {
            id: ContactId::new(id)?,
            name: name.to_string(),
            company: company.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            last_contact: last_contact.to_string(),
            job_level,
            status,
        })
    };

    Ok(vec![
        contact(
            "1",
            "Juliana Silva",
            "Ambev",
            "juliana@ambev.com.br",
            "(11) 98888-8888",
            "20/10/2023",
            ContactStatus::Active,
            JobLevel::Diretor,
        )?,
        contact(
            "2",
            "Rodrigo Costa",
            "XP Inc",
            "rodrigo@xp.com.br",
            "(11) 97777-7777",
            "18/10/2023",
            ContactStatus::Lead,
            JobLevel::Gerente,
        )?,
        contact(
            "3",
            "Fernanda Lima",
            "Natura",
            "fernanda@natura.net",
            "(11) 96666-6666",
            "22/10/2023",
            ContactStatus::Active,
            JobLevel::CLevel,
        )?,
    ])
}

pub fn demo_deals() -> Result<Vec<Deal>, ValidationError> {
    Ok(vec![
        Deal {
            id: DealId::new("1")?,
            title: "Campanha Interna Q4".to_string(),
            contact_id: ContactId::new("1")?,
            responsible_id: TeamMemberId::new("1")?,
            value: Money::from_reais(45_000),
            stage: DealStage::Proposal,
            expected_close_date: "15/11/2023".to_string(),
            products: vec!["Endomarketing".to_string(), "Criação Visual".to_string()],
            temperature: DealTemperature::Hot,
            sale_type: SaleType::Normal,
            engagement_model: EngagementModel::Job,
            description: Some(
                "Campanha de reconhecimento para o time de vendas global.".to_string(),
            ),
        },
        Deal {
            id: DealId::new("2")?,
            title: "Employer Branding Review".to_string(),
            contact_id: ContactId::new("2")?,
            responsible_id: TeamMemberId::new("1")?,
            value: Money::from_reais(25_000),
            stage: DealStage::Negotiation,
            expected_close_date: "30/10/2023".to_string(),
            products: vec!["Consultoria de EVP".to_string()],
            temperature: DealTemperature::Warm,
            sale_type: SaleType::Upsell,
            engagement_model: EngagementModel::Fee,
            description: Some(
                "Revisão semestral do posicionamento de marca empregadora.".to_string(),
            ),
        },
    ])
}
