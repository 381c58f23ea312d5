//! Permissioned resource categories.

use serde::{Deserialize, Serialize};

/// A resource category subject to independent permissioning.
///
/// The set is closed: a new platform area must be added here and given
/// route-table entries before it can be permissioned. Stored grant data
/// naming a module outside this set is rejected at deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// Buildings and vacant units.
    Properties,
    /// Tenant records.
    Tenants,
    /// Lease agreements.
    Leases,
    /// Financial transactions and rent collection.
    Payments,
    /// Maintenance and move requests.
    MaintenanceRequests,
    /// Occupancy and financial reporting.
    Reports,
    /// Company profile and billing settings.
    CompanySettings,
    /// Company member accounts and their grants.
    UserManagement,
}

impl Module {
    /// Returns the stored/wire name of the module.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Tenants => "tenants",
            Self::Leases => "leases",
            Self::Payments => "payments",
            Self::MaintenanceRequests => "maintenance_requests",
            Self::Reports => "reports",
            Self::CompanySettings => "company_settings",
            Self::UserManagement => "user_management",
        }
    }

    /// All modules, in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Properties,
            Self::Tenants,
            Self::Leases,
            Self::Payments,
            Self::MaintenanceRequests,
            Self::Reports,
            Self::CompanySettings,
            Self::UserManagement,
        ]
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_every_module() {
        assert_eq!(Module::all().len(), 8);
    }

    #[test]
    fn test_names_are_snake_case() {
        for module in Module::all() {
            let name = module.as_str();
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "Module name '{name}' should be snake_case"
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<&str> = Module::all().iter().map(|m| m.as_str()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for module in Module::all() {
            let json = serde_json::to_string(module).unwrap();
            assert_eq!(json, format!("\"{}\"", module.as_str()));
        }
    }

    #[test]
    fn test_deserialize_known_module() {
        let module: Module = serde_json::from_str("\"maintenance_requests\"").unwrap();
        assert_eq!(module, Module::MaintenanceRequests);
    }

    #[test]
    fn test_deserialize_rejects_unknown_module() {
        let result = serde_json::from_str::<Module>("\"billing\"");
        assert!(result.is_err());
    }
}
