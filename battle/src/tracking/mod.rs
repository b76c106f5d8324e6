//! Log tracking across successive snapshots

mod log;

pub use log::{LOG_TAIL, LogCursor, recent_logs};
