//! Request middleware.
//!
//! - [`error_detail::expose_error_detail`] -- Adds the underlying error text to
//!   500 responses when running in development mode.

pub mod error_detail;
