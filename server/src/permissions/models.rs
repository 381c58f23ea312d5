//! Access profile shapes stored per user.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::level::AccessLevel;
use super::module::Module;

/// A single grant record: a subset of modules, each with a set of tiers.
///
/// A user may hold several grants and the same module may appear in more
/// than one of them; level sets are not merged ahead of time. Stored as
/// JSONB, e.g. `{"tenants": ["read", "write"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessGrant(BTreeMap<Module, BTreeSet<AccessLevel>>);

impl AccessGrant {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grant covering a single module.
    #[must_use]
    pub fn of(module: Module, levels: impl IntoIterator<Item = AccessLevel>) -> Self {
        let mut grant = Self::default();
        grant.insert(module, levels);
        grant
    }

    /// Add tiers for a module, keeping any already present.
    pub fn insert(&mut self, module: Module, levels: impl IntoIterator<Item = AccessLevel>) {
        self.0.entry(module).or_default().extend(levels);
    }

    /// Tiers this grant holds for `module`, if the module is listed at all.
    ///
    /// A listed module with an empty set is distinct from an unlisted
    /// module: the former resolves to `none`, the latter defers to later
    /// grants.
    #[must_use]
    pub fn levels(&self, module: Module) -> Option<&BTreeSet<AccessLevel>> {
        self.0.get(&module)
    }

    /// Whether any module in this grant carries the `admin` tier.
    #[must_use]
    pub fn contains_admin(&self) -> bool {
        self.0.values().any(|levels| levels.contains(&AccessLevel::Admin))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Snapshot of a user's authorization inputs.
///
/// Read fresh from storage per authorization decision; nothing here is
/// cached. `role` and `company_id` are carried for scoping and display
/// but are never consulted by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccessProfile {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub role: Option<String>,
    /// Company owners bypass every permission check.
    pub is_company_owner: bool,
    pub access_grants: Vec<AccessGrant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_deserializes_from_stored_shape() {
        let grant: AccessGrant =
            serde_json::from_str(r#"{"tenants": ["read", "write"]}"#).unwrap();

        let levels = grant.levels(Module::Tenants).unwrap();
        assert!(levels.contains(&AccessLevel::Read));
        assert!(levels.contains(&AccessLevel::Write));
        assert!(grant.levels(Module::Payments).is_none());
    }

    #[test]
    fn test_grant_list_deserializes() {
        let grants: Vec<AccessGrant> = serde_json::from_str(
            r#"[{"tenants": ["read"]}, {"reports": ["admin"], "leases": []}]"#,
        )
        .unwrap();

        assert_eq!(grants.len(), 2);
        assert!(!grants[0].contains_admin());
        assert!(grants[1].contains_admin());
        assert!(grants[1].levels(Module::Leases).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_module_rejected_at_deserialization() {
        let result = serde_json::from_str::<AccessGrant>(r#"{"billing": ["read"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_level_rejected_at_deserialization() {
        let result = serde_json::from_str::<AccessGrant>(r#"{"tenants": ["owner"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = AccessGrant::of(
            Module::Payments,
            [AccessLevel::Read, AccessLevel::Write, AccessLevel::Delete],
        );

        let json = serde_json::to_string(&original).unwrap();
        let restored: AccessGrant = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_insert_merges_levels() {
        let mut grant = AccessGrant::new();
        grant.insert(Module::Tenants, [AccessLevel::Read]);
        grant.insert(Module::Tenants, [AccessLevel::Write]);

        let levels = grant.levels(Module::Tenants).unwrap();
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_contains_admin_scans_all_modules() {
        let mut grant = AccessGrant::of(Module::Tenants, [AccessLevel::Read]);
        assert!(!grant.contains_admin());

        grant.insert(Module::Reports, [AccessLevel::Admin]);
        assert!(grant.contains_admin());
    }
}
