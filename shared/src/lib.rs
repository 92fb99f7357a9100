//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the server that renders the
//! forms and the client-side validator running in the page.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::validation`]**: Per-field validation messages
//!
//! ## Usage in the Page
//!
//! ```rust
//! use shared::FieldErrors;
//!
//! let errors: FieldErrors =
//!     serde_json::from_str(r#"{"errors":{"email":"This email is already registered"}}"#)
//!         .unwrap();
//! assert_eq!(errors.get("email"), Some("This email is already registered"));
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
