//! Route handlers

pub mod budget;
pub mod health;
