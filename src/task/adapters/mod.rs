//! Adapter implementations for the todo list ports.
//!
//! - [`memory`]: in-process fakes for tests and offline demos
//! - [`http`]: `reqwest` client for the REST task API
//! - [`fs`]: directory-backed durable store
//! - [`template`]: `minijinja` view that renders HTML fragments

pub mod fs;
pub mod http;
pub mod memory;
pub mod template;
