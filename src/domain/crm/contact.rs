//! Contact records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContactId, ValidationError};

/// Seniority of a contact inside the client company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobLevel {
    #[serde(rename = "C-Level")]
    CLevel,
    Diretor,
    Gerente,
    Coordenador,
    Supervisor,
    Especialista,
    Analista,
    Consultor,
    Outro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Lead,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub last_contact: String,
    pub job_level: JobLevel,
    pub status: ContactStatus,
}

impl Contact {
    /// Case-insensitive match over name, company and email.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.name, &self.company, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Input for creating or editing a contact.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub last_contact: String,
    pub job_level: JobLevel,
    pub status: ContactStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            last_contact: String::new(),
            job_level: JobLevel::Gerente,
            status: ContactStatus::Lead,
        }
    }
}

impl ContactForm {
    pub fn into_record(self) -> Result<Contact, ValidationError> {
        self.apply_to(ContactId::generate())
    }

    pub fn apply_to(self, id: ContactId) -> Result<Contact, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let email = self.email.trim().to_string();
        if !email.is_empty() && !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }

        Ok(Contact {
            id,
            name,
            company: self.company.trim().to_string(),
            email,
            phone: self.phone.trim().to_string(),
            last_contact: self.last_contact.trim().to_string(),
            job_level: self.job_level,
            status: self.status,
        })
    }
}
