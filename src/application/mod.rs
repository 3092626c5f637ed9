//! Application layer - use-case handlers.
//!
//! This layer drives the TOPSIS core from the outside: it loads tables through
//! ports, runs validation and computation, and hands results to writers or mailers.

pub mod handlers;

pub use handlers::{
    rank_raw_table, Delivery, RankError, RankFileCommand, RankFileHandler, RankFileResult,
    RankUploadCommand, RankUploadHandler, RankUploadResult,
};
