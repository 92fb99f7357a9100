//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the server-rendered page and the
//! client-side validator.
//!
//! ## Module Organization
//!
//! - [`validation`] - Per-field validation messages ([`FieldErrors`])
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "errors": {
//!     "email": "This email is already registered",
//!     "name": "This username is already taken"
//!   }
//! }
//! ```

pub mod validation;

pub use validation::*;
