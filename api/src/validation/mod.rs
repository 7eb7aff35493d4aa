//! Submission Validation Module
//!
//! # Overview
//!
//! 1. **Extractors** - `Payload` decodes JSON or form bodies, `Validated<T>`
//!    runs validation and normalization before the handler
//! 2. **Validators** - one function per rule, each mapped to its `ApiError`
//! 3. **Coercion** - loose truthiness, text and number conversion of values
//! 4. **Form** - bracket-aware expansion of form-encoded keys
//!
//! Rules run in order (presence, email, age, phone) and the first failure
//! is returned:
//!
//! ```json
//! {"code": "ERR_INVALID_AGE", "error": "Age must be a number between 18 and 120"}
//! ```

pub mod coerce;
pub mod extractors;
pub mod form;
pub mod requests;
pub mod validators;

pub use extractors::Validated;
