//! # exfs-core - Shared Foundation
//!
//! Foundation crate for exfs. Provides error handling, logging setup,
//! platform detection and path boundary helpers.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Platform Detection (`platform`)
//! - [`Platform`] - Supported operating systems, detected from the running OS
//!
//! ### Paths (`paths`)
//! - [`is_within()`] - Component-aware "equal to or below" check
//!
//! ## Prelude
//!
//! ```rust
//! use exfs_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod paths;
pub mod platform;

/// Prelude for common imports used throughout all exfs crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use paths::{depth_below, is_within};
pub use platform::Platform;
