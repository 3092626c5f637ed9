//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the TOPSIS core to the outside world:
//! - `csv` - Comma-separated text codec, file reader and atomic file writer
//! - `email` - Result delivery through the Resend API, plus a recording double
//! - `http` - JSON API for the interactive form

pub mod csv;
pub mod email;
pub mod http;

pub use self::csv::{parse_raw_table, render_ranked_result, CsvResultWriter, CsvTableReader};
pub use email::{RecordingMailer, ResendMailer};
pub use http::{app_router, topsis_routes, TopsisAppState};
