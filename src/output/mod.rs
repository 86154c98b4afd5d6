//! Output module for the NDJSON dataset

mod ndjson;

pub use ndjson::NdjsonWriter;
