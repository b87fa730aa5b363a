//! CLI Errors

use std::io;

use thiserror::Error;

use catalog_app::{
    context::AppInitError, detail::DetailError, form::FormError, listing::ListError,
};

/// Failures that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The client could not be set up.
    #[error(transparent)]
    Init(#[from] AppInitError),

    /// Listing failed.
    #[error(transparent)]
    List(#[from] ListError),

    /// Loading or deleting a single product failed.
    #[error(transparent)]
    Detail(#[from] DetailError),

    /// Creating or editing a product failed.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The submitted product did not pass validation; the reasons were already printed.
    #[error("product is invalid")]
    Invalid,

    /// The store could not say whether the id is taken.
    #[error("could not verify product id {0}")]
    CheckInconclusive(String),

    /// Writing output or reading confirmation failed.
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}
