//! Task list management for Tasklists.
//!
//! This module implements creating, renaming, reading, paging, and deleting
//! task lists, and granting or revoking other users' access to them. Only
//! the owner may rename or delete a list; non-owners gain visibility by
//! holding a relation. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
