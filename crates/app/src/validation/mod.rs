//! Product record validation.
//!
//! Synchronous per-field rules, the release/revision cross-field rule and the
//! asynchronous id uniqueness rule. Results are data (sets of
//! [`ErrorReason`]), never errors.

mod engine;
pub mod reasons;
pub mod rules;
pub mod state;
pub mod uniqueness;

pub use engine::ValidationEngine;
pub use reasons::{ErrorReason, ErrorSet, Field};
pub use rules::{FieldRule, FieldSpec};
pub use state::{FieldState, FormState, Validity};
pub use uniqueness::{CheckTicket, Resolution, UniquenessOutcome, UniquenessStatus};
