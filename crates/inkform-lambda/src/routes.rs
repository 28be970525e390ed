pub mod health;
pub mod waiver;
