//! # Form Validation for the Browser
//!
//! WebAssembly build of `lib-form`. Page scripts get two entry points:
//!
//! - `FormValidation`: the per-field helpers, taking elements directly
//! - `CredentialsForm`: a whole sign-up / sign-in form bound by element ids

use wasm_bindgen::prelude::*;

mod api;
mod dom;
mod form;

pub use api::FormValidation;
pub use form::WebForm;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("form validation loaded");
}
