//! # oie-core - Core Types
//!
//! Foundation crate for open-in-editor. Provides error handling, the
//! append-only diagnostic log, and locator URL parsing.
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum covering locator, editor resolution, and launch failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Locators (`locator`)
//! - [`Locator`] - File path with optional 1-based line and column
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - Install the file-backed tracing subscriber
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use oie_core::prelude::*;
//! ```

pub mod error;
pub mod locator;
pub mod logging;

/// Prelude for common imports used throughout all open-in-editor crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use locator::Locator;
