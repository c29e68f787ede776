//! Agency team roster referenced by deals and tasks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TeamMemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub email: String,
}

/// Ordered list of team members.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
}

impl TeamRoster {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn get(&self, id: &TeamMemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Case-insensitive lookup by email.
    pub fn find_by_email(&self, email: &str) -> Option<&TeamMember> {
        let email = email.trim();
        self.members
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email))
    }
}
