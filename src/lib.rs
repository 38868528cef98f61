//! Todolist: a task list client that keeps working when its server does not.
//!
//! The crate keeps an ordered task list in step with a remote REST API and a
//! durable key-value store. Remote failures degrade to local-only changes
//! instead of blocking the user.
//!
//! # Architecture
//!
//! Todolist follows hexagonal architecture principles:
//!
//! - **Domain**: Task values, identifiers and the ordered list
//! - **Ports**: Trait interfaces for the remote API, the durable store and
//!   the view
//! - **Adapters**: HTTP, filesystem, template and in-memory implementations
//!   of the ports
//! - **Services**: Persistence and the controller that orchestrates them
//!
//! # Modules
//!
//! - [`config`]: Client configuration from the environment or JSON
//! - [`task`]: Task list domain, ports, adapters and services

pub mod config;
pub mod task;
