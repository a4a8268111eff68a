//! Authorization registry: a trivial allow-list with one permanent owner.
//!
//! The owner is fixed at construction for the lifetime of the registry;
//! there is no ownership transfer. Membership checks guard every mutating
//! store operation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::model::ActorId;

/// Set of identities permitted to mutate the ledger, plus the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRegistry {
    owner: ActorId,
    authorized: HashSet<ActorId>,
}

impl AuthRegistry {
    /// Create a registry with the given owner and an empty set.
    pub fn new(owner: ActorId) -> Self {
        Self {
            owner,
            authorized: HashSet::new(),
        }
    }

    pub fn owner(&self) -> &ActorId {
        &self.owner
    }

    /// Whether `actor` may perform mutating operations.
    pub fn is_authorized(&self, actor: &ActorId) -> bool {
        *actor == self.owner || self.authorized.contains(actor)
    }

    /// Guard used by every mutating operation.
    pub fn require_authorized(&self, caller: &ActorId) -> Result<(), LedgerError> {
        if self.is_authorized(caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized(caller.clone()))
        }
    }

    /// Add `target` to the authorized set. Owner-only.
    pub fn authorize(&mut self, caller: &ActorId, target: &ActorId) -> Result<(), LedgerError> {
        if *caller != self.owner {
            return Err(LedgerError::Unauthorized(caller.clone()));
        }
        if target.is_null() {
            return Err(LedgerError::InvalidTarget);
        }
        if *target == self.owner || self.authorized.contains(target) {
            return Err(LedgerError::AlreadyAuthorized(target.clone()));
        }
        self.authorized.insert(target.clone());
        Ok(())
    }

    /// Remove `target` from the authorized set. Owner-only; the owner
    /// itself cannot be removed.
    pub fn deauthorize(&mut self, caller: &ActorId, target: &ActorId) -> Result<(), LedgerError> {
        if *caller != self.owner {
            return Err(LedgerError::Unauthorized(caller.clone()));
        }
        if *target == self.owner {
            return Err(LedgerError::CannotModifyOwner);
        }
        if !self.authorized.remove(target) {
            return Err(LedgerError::NotAuthorized(target.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AuthRegistry {
        AuthRegistry::new("owner".into())
    }

    #[test]
    fn owner_is_always_authorized() {
        let reg = registry();
        assert!(reg.is_authorized(&"owner".into()));
        assert!(reg.require_authorized(&"owner".into()).is_ok());
    }

    #[test]
    fn authorize_then_require_passes() {
        let mut reg = registry();
        reg.authorize(&"owner".into(), &"alice".into()).unwrap();
        assert!(reg.require_authorized(&"alice".into()).is_ok());
    }

    #[test]
    fn non_owner_cannot_grant() {
        let mut reg = registry();
        reg.authorize(&"owner".into(), &"alice".into()).unwrap();
        assert_eq!(
            reg.authorize(&"alice".into(), &"bob".into()),
            Err(LedgerError::Unauthorized("alice".into()))
        );
    }

    #[test]
    fn null_target_rejected() {
        let mut reg = registry();
        assert_eq!(
            reg.authorize(&"owner".into(), &"".into()),
            Err(LedgerError::InvalidTarget)
        );
    }

    #[test]
    fn duplicate_grant_rejected() {
        let mut reg = registry();
        reg.authorize(&"owner".into(), &"alice".into()).unwrap();
        assert_eq!(
            reg.authorize(&"owner".into(), &"alice".into()),
            Err(LedgerError::AlreadyAuthorized("alice".into()))
        );
    }

    #[test]
    fn owner_cannot_be_deauthorized() {
        let mut reg = registry();
        assert_eq!(
            reg.deauthorize(&"owner".into(), &"owner".into()),
            Err(LedgerError::CannotModifyOwner)
        );
    }

    #[test]
    fn deauthorize_absent_target_fails() {
        let mut reg = registry();
        assert_eq!(
            reg.deauthorize(&"owner".into(), &"ghost".into()),
            Err(LedgerError::NotAuthorized("ghost".into()))
        );
    }

    #[test]
    fn deauthorize_revokes_access() {
        let mut reg = registry();
        reg.authorize(&"owner".into(), &"alice".into()).unwrap();
        reg.deauthorize(&"owner".into(), &"alice".into()).unwrap();
        assert_eq!(
            reg.require_authorized(&"alice".into()),
            Err(LedgerError::Unauthorized("alice".into()))
        );
    }
}
