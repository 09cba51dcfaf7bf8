//! Catalog taxonomy rule engine.
//!
//! This crate holds a three-level category tree (main, sub and sub-sub
//! categories), resolves the effective business rules and availability of
//! every node, and applies audited admin commands through an in-memory
//! repository. [`Taxonomy`] is the entry point used by UI layers.

pub mod config;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod projector;
pub mod repository;
pub mod resolver;
pub mod seed;
pub mod services;
pub mod subscriptions;
pub mod taxonomy;

pub use taxonomy::Taxonomy;

/// Admin name recorded when neither the command nor the config provides one.
pub const DEFAULT_ADMIN_NAME: &str = "Admin";
