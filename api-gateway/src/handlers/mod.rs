pub mod attractions;
pub mod health;
