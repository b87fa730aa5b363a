//! Check Product Id Command

use std::{io::Write, sync::Arc};

use clap::Args;

use catalog_app::{
    context::AppContext,
    validation::{ErrorReason, Field, UniquenessOutcome, ValidationEngine},
};

use crate::errors::CliError;

#[derive(Debug, Args)]
pub(crate) struct CheckIdArgs {
    /// Candidate product id
    pub(crate) id: String,
}

/// Exits successfully only when the id is well-formed and unused.
pub(crate) async fn run(
    args: CheckIdArgs,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let engine = ValidationEngine::for_products(Arc::clone(&app.products));
    let errors = engine.validate_field(Field::Id, &args.id);

    if !errors.is_empty() {
        for reason in &errors {
            writeln!(out, "{}: {reason}", Field::Id)?;
        }

        return Err(CliError::Invalid);
    }

    match engine.validate_unique(&args.id).await {
        UniquenessOutcome::Available => {
            writeln!(out, "{} is available", args.id)?;

            Ok(())
        }
        UniquenessOutcome::Taken => {
            writeln!(out, "{}: {}", Field::Id, ErrorReason::IdAlreadyExists)?;

            Err(CliError::Invalid)
        }
        UniquenessOutcome::Inconclusive => Err(CliError::CheckInconclusive(args.id)),
    }
}
