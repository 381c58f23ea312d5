//! Permission resolution logic.
//!
//! Pure functions over a [`UserAccessProfile`] snapshot; no I/O, no
//! panics, every path returns a boolean or an [`AccessLevel`].

use super::level::AccessLevel;
use super::models::{AccessGrant, UserAccessProfile};
use super::module::Module;
use super::routes::route_requirement;

/// Check whether a user holds at least `required` access to `module`.
///
/// Resolution order:
/// 1. No profile (unauthenticated, unknown user, or failed lookup): denied
/// 2. Company owner: allowed
/// 3. An `admin` tier in any grant, for any module, allows everything
/// 4. Otherwise the first grant listing `module` is consulted; its highest
///    tier must rank at or above `required`. Grants are not merged.
/// 5. No grant lists `module`: denied
#[must_use]
pub fn has_access(
    profile: Option<&UserAccessProfile>,
    module: Module,
    required: AccessLevel,
) -> bool {
    let Some(profile) = profile else {
        return false;
    };

    if profile.is_company_owner || holds_admin_anywhere(profile) {
        return true;
    }

    profile
        .access_grants
        .iter()
        .find_map(|grant| grant.levels(module))
        .is_some_and(|levels| max_level(levels) >= required)
}

/// Resolve a user's effective tier for `module`.
///
/// Same resolution order as [`has_access`]: owners and admin-anywhere
/// holders resolve to `admin`; otherwise the highest tier in the first
/// grant listing `module`, or `none`.
#[must_use]
pub fn access_level(profile: Option<&UserAccessProfile>, module: Module) -> AccessLevel {
    let Some(profile) = profile else {
        return AccessLevel::None;
    };

    if profile.is_company_owner || holds_admin_anywhere(profile) {
        return AccessLevel::Admin;
    }

    profile
        .access_grants
        .iter()
        .find_map(|grant| grant.levels(module))
        .map_or(AccessLevel::None, max_level)
}

/// Check whether a user may reach `route`.
///
/// No profile denies unconditionally; owners pass unconditionally. Routes
/// absent from the static table are open to any authenticated user, so a
/// new route is reachable until it gets a table entry.
#[must_use]
pub fn can_access_route(profile: Option<&UserAccessProfile>, route: &str) -> bool {
    let Some(profile) = profile else {
        return false;
    };

    if profile.is_company_owner {
        return true;
    }

    route_requirement(route)
        .is_none_or(|guard| has_access(Some(profile), guard.module, guard.minimum))
}

fn holds_admin_anywhere(profile: &UserAccessProfile) -> bool {
    profile.access_grants.iter().any(AccessGrant::contains_admin)
}

/// Highest tier in a set; an empty set ranks as `none`.
fn max_level(levels: &std::collections::BTreeSet<AccessLevel>) -> AccessLevel {
    levels.iter().next_back().copied().unwrap_or(AccessLevel::None)
}
