//! # Mountview App
//!
//! HTTP surface for the budget history page and the approver's list.
//!
//! Handlers are thin: each one calls `BudgetService` and serialises the view
//! model it returns. Rendering is left to the client.

pub mod context;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
