//! # Built-in handlers
//!
//! Small, self-contained implementations useful for demos and debugging.
//!
//! - [`LogWriter`]: logs every received event via `tracing` (demo/debug).

mod log;

pub use log::LogWriter;
