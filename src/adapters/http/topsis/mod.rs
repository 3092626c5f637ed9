//! TOPSIS HTTP adapter module.
//!
//! The interactive shell: upload a table, preview the ranking, download the
//! result file or have it mailed.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{TopsisApiError, TopsisAppState};
pub use routes::topsis_routes;
