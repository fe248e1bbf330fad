pub mod identifiers;
pub mod repositories;
