//! Task list management and synchronization.
//!
//! A single controller owns the ordered task list and reconciles it with a
//! remote REST API and a durable key-value store, degrading to local-only
//! changes when the API fails and to an in-memory list when the store is
//! unusable. The module follows hexagonal architecture:
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
