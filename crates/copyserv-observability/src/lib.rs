//! Structured logging for the CopyServ tools.
//!
//! This crate provides:
//! - `SessionId` - Identifier shared by every entry of one run
//! - `StructuredLogger` - Structured logging with session context
//! - `LogBuilder` - Fluent construction of entries with typed fields

mod logging;
mod session;

pub use logging::*;
pub use session::*;
