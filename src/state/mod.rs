//! State tracking for pipeline progress
//!
//! Tracks each keyword query through the resolve → fetch → write lifecycle.

mod query_state;

pub use query_state::QueryState;
