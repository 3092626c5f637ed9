//! CSV adapters - the tabular file reader and writer collaborators.

mod codec;
mod csv_result_writer;
mod csv_table_reader;

pub use codec::{parse_raw_table, render_ranked_result};
pub use csv_result_writer::CsvResultWriter;
pub use csv_table_reader::CsvTableReader;
