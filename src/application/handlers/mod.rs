//! Application handlers.
//!
//! Use-case handlers that orchestrate the domain core and the ports.

pub mod ranking;

pub use ranking::{
    rank_raw_table, Delivery, RankError, RankFileCommand, RankFileHandler, RankFileResult,
    RankUploadCommand, RankUploadHandler, RankUploadResult,
};
