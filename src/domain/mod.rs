//! Domain model of the category taxonomy.

pub mod audit;
pub mod category;
pub mod path;
pub mod rules;
pub mod types;
