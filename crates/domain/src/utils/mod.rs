//! Pure helpers shared by the engine and the adapters

pub mod currency;
pub mod number;
