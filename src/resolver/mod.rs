//! Pure functions deriving effective rules and availability from tree state.

pub mod availability;
pub mod rules;

pub use availability::{Availability, resolve_availability};
pub use rules::{DIGITAL_MAIN_CODE, resolve_chain, resolve_effective_rules};
