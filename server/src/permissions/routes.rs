//! Static route protection table.

use super::level::AccessLevel;
use super::module::Module;

/// Minimum access required for a route subtree.
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    /// Path prefix, matched on whole segments.
    pub path: &'static str,
    pub module: Module,
    pub minimum: AccessLevel,
}

/// Routes with an explicit access requirement.
///
/// Paths absent from this table are open to any authenticated user; a new
/// route stays open until it gets an entry here.
pub const PROTECTED_ROUTES: &[RouteGuard] = &[
    RouteGuard {
        path: "/api/properties",
        module: Module::Properties,
        minimum: AccessLevel::Read,
    },
    RouteGuard {
        path: "/api/tenants",
        module: Module::Tenants,
        minimum: AccessLevel::Read,
    },
    RouteGuard {
        path: "/api/leases",
        module: Module::Leases,
        minimum: AccessLevel::Read,
    },
    RouteGuard {
        path: "/api/payments",
        module: Module::Payments,
        minimum: AccessLevel::Read,
    },
    RouteGuard {
        path: "/api/maintenance",
        module: Module::MaintenanceRequests,
        minimum: AccessLevel::Read,
    },
    RouteGuard {
        path: "/api/reports",
        module: Module::Reports,
        minimum: AccessLevel::Read,
    },
    RouteGuard {
        path: "/api/company/settings",
        module: Module::CompanySettings,
        minimum: AccessLevel::Manage,
    },
    RouteGuard {
        path: "/api/users",
        module: Module::UserManagement,
        minimum: AccessLevel::Read,
    },
];

/// Look up the guard covering `path`, if any.
///
/// Matching is segment-aware: `/api/tenants` covers `/api/tenants/42` but
/// not `/api/tenantsx`.
#[must_use]
pub fn route_requirement(path: &str) -> Option<&'static RouteGuard> {
    PROTECTED_ROUTES.iter().find(|guard| {
        path.strip_prefix(guard.path)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_path_matches() {
        let guard = route_requirement("/api/tenants").unwrap();
        assert_eq!(guard.module, Module::Tenants);
        assert_eq!(guard.minimum, AccessLevel::Read);
    }

    #[test]
    fn test_subpath_matches() {
        let guard = route_requirement("/api/leases/42/renewal").unwrap();
        assert_eq!(guard.module, Module::Leases);
    }

    #[test]
    fn test_matching_is_segment_aware() {
        assert!(route_requirement("/api/tenantsx").is_none());
        assert!(route_requirement("/api/tenants-export").is_none());
    }

    #[test]
    fn test_unmapped_route_has_no_guard() {
        assert!(route_requirement("/api/dashboard").is_none());
        assert!(route_requirement("/health").is_none());
    }

    #[test]
    fn test_company_settings_requires_manage() {
        let guard = route_requirement("/api/company/settings").unwrap();
        assert_eq!(guard.module, Module::CompanySettings);
        assert_eq!(guard.minimum, AccessLevel::Manage);
    }

    #[test]
    fn test_guard_paths_are_unique() {
        let mut paths: Vec<&str> = PROTECTED_ROUTES.iter().map(|g| g.path).collect();
        paths.sort_unstable();
        let len = paths.len();
        paths.dedup();
        assert_eq!(len, paths.len());
    }
}
