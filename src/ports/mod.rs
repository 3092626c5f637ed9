//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableReader` - Loads a raw decision table from a file
//! - `ResultWriter` - Persists a ranked result
//! - `ResultMailer` - Delivers a serialized result to an addressee

mod result_mailer;
mod result_writer;
mod table_reader;

pub use result_mailer::{validate_recipient, DeliveryError, ResultEmail, ResultMailer};
pub use result_writer::{ResultWriteError, ResultWriter};
pub use table_reader::{TableReadError, TableReader};
