//! Ranking handlers - the file and upload shells around the TOPSIS core.

mod errors;
mod rank_file;
mod rank_table;
mod rank_upload;

pub use errors::RankError;
pub use rank_file::{RankFileCommand, RankFileHandler, RankFileResult};
pub use rank_table::rank_raw_table;
pub use rank_upload::{Delivery, RankUploadCommand, RankUploadHandler, RankUploadResult};
