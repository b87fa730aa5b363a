//! Shared fixtures and test doubles.

mod fixtures;

pub(crate) use fixtures::*;
pub(crate) use gated::GatedRepository;
