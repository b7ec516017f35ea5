//! Unified error handling for bossdex.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain-specific Errors**: network and system errors here, catalog and
//!   preference errors next to the code that raises them
//! - **Unified Error Type**: `BossdexError` consolidates all of them
//! - **Error Context**: operation/component/resource attached for logs
//! - **Result Type Alias**: `BossdexResult<T>`
//!
//! | Category | Description |
//! |----------|-------------|
//! | Network | Connection, timeout |
//! | Server | Error status or unusable catalog body |
//! | System | OS/filesystem errors |
//! | Configuration | Bad URL, data dir or arguments |
//!
//! Catalog fetch failures and preference write failures are never fatal and
//! never retried: the app logs them and keeps its in-memory state.

mod bossdex_error;
mod category;
mod context;
mod network;
mod result;
mod system;

pub use bossdex_error::BossdexError;
pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use network::{classify_http_error, NetworkError};
pub use result::{BossdexResult, ResultExt};
pub use system::{classify_io_error, SystemError};
