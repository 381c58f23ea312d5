//! Swyft Agent Server
//!
//! Backend for a multi-tenant property management platform: landlords,
//! agents, and property-management companies with per-module role-based
//! access control.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod permissions;
