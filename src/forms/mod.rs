//! Admin command forms and their validated payloads.

pub mod categories;
