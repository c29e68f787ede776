//! Session gate - admits only corporate accounts.

use crate::domain::crm::{TeamMember, TeamRoster};
use crate::domain::foundation::{AuthorizationError, CorporateDomain, SignedInIdentity};

/// A signed-in identity that passed the domain check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedSession {
    pub identity: SignedInIdentity,
    /// Roster entry with the same email, when there is one.
    pub member: Option<TeamMember>,
}

/// Holds at most one authorized session.
#[derive(Debug, Clone)]
pub struct SessionGate {
    domain: CorporateDomain,
    roster: TeamRoster,
    current: Option<AuthorizedSession>,
}

impl SessionGate {
    pub fn new(domain: CorporateDomain, roster: TeamRoster) -> Self {
        Self {
            domain,
            roster,
            current: None,
        }
    }

    /// Admits `identity` if its email is on the corporate domain.
    ///
    /// A rejected identity also ends whatever session was active.
    pub fn sign_in(
        &mut self,
        identity: SignedInIdentity,
    ) -> Result<&AuthorizedSession, AuthorizationError> {
        if let Err(err) = self.domain.authorize(&identity) {
            tracing::warn!(email = %identity.email, "sign-in rejected for non-corporate account");
            self.current = None;
            return Err(err);
        }

        let member = self.roster.find_by_email(&identity.email).cloned();
        tracing::info!(
            email = %identity.email,
            member = member.as_ref().map(|m| m.name.as_str()).unwrap_or("-"),
            "signed in"
        );

        Ok(self.current.insert(AuthorizedSession { identity, member }))
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!(email = %session.identity.email, "signed out");
        }
    }

    pub fn current(&self) -> Option<&AuthorizedSession> {
        self.current.as_ref()
    }

    /// The active session, or [`AuthorizationError::NotSignedIn`].
    pub fn require_session(&self) -> Result<&AuthorizedSession, AuthorizationError> {
        self.current.as_ref().ok_or(AuthorizationError::NotSignedIn)
    }

    pub fn domain(&self) -> &CorporateDomain {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crm::default_roster;

    fn gate() -> SessionGate {
        SessionGate::new(
            CorporateDomain::new("wearesmart.com.br").unwrap(),
            default_roster().unwrap(),
        )
    }

    fn identity(email: &str) -> SignedInIdentity {
        SignedInIdentity::new("sub-1", email, None)
    }

    #[test]
    fn corporate_account_is_admitted_and_matched_to_roster() {
        let mut gate = gate();

        let session = gate
            .sign_in(identity("Estrategista@WeAreSmart.com.br"))
            .unwrap()
            .clone();

        assert_eq!(session.member.unwrap().name, "Estrategista Smart");
        assert!(gate.require_session().is_ok());
    }

    #[test]
    fn corporate_account_outside_roster_has_no_member() {
        let mut gate = gate();
        let session = gate.sign_in(identity("nova@wearesmart.com.br")).unwrap();
        assert!(session.member.is_none());
    }

    #[test]
    fn rejection_ends_active_session() {
        let mut gate = gate();
        gate.sign_in(identity("ana@wearesmart.com.br")).unwrap();

        let err = gate
            .sign_in(identity("ana@notwearesmart.com.br"))
            .unwrap_err();

        assert!(matches!(err, AuthorizationError::DomainNotAllowed { .. }));
        assert!(gate.current().is_none());
        assert_eq!(gate.require_session(), Err(AuthorizationError::NotSignedIn));
    }

    #[test]
    fn sign_out_clears_session() {
        let mut gate = gate();
        gate.sign_in(identity("ana@wearesmart.com.br")).unwrap();
        gate.sign_out();
        assert!(gate.current().is_none());
    }
}
