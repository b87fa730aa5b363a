//! Product catalog client: repository, validation and view controllers.

pub mod context;
pub mod detail;
pub mod domain;
pub mod form;
pub mod listing;
pub mod navigation;
pub mod validation;

#[cfg(test)]
mod test;
