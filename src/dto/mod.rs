//! Read-only views handed to UI and admin layers.

pub mod categories;
pub mod command;
