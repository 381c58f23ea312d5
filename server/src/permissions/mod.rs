//! Permission system types and utilities.
//!
//! Two layers:
//! - A pure resolver over per-module access grants (no I/O, never errors)
//! - Storage and HTTP plumbing that feeds it: the grants column, the
//!   static route table, helpers, and a route-guard middleware

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod level;
pub mod middleware;
pub mod models;
pub mod module;
pub mod queries;
pub mod resolver;
pub mod routes;

pub use error::PermissionError;
pub use helpers::require_module_access;
pub use level::AccessLevel;
pub use middleware::enforce_route_access;
pub use models::{AccessGrant, UserAccessProfile};
pub use module::Module;
pub use queries::{fetch_access_profile, update_access_grants};
pub use resolver::{access_level, can_access_route, has_access};
pub use routes::{route_requirement, RouteGuard, PROTECTED_ROUTES};
