pub mod consent;
pub mod medical;
pub mod waiver;
