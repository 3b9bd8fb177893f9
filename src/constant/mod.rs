//! Write-once attribute stores.
//!
//! [`ConstantAttributes`] enforces that each attribute name on a store,
//! once assigned, cannot be reassigned. Rebinding fails with
//! [`ConstantError`], which carries the offending name.
//!
//! # Examples
//!
//! ```rust
//! use funcpipe::constant::ConstantAttributes;
//!
//! let mut settings = ConstantAttributes::new();
//! settings.set("retries", 3).unwrap();
//! assert!(settings.set("retries", 5).is_err());
//! assert_eq!(settings.get("retries"), Some(&3));
//! ```

mod store;

pub use store::{ConstantAttributes, ConstantError};
