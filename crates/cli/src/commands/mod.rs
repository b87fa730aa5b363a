//! Catalog commands

use std::io::{BufRead, Write};

use clap::{Args, Subcommand};

use catalog_app::{
    context::AppContext,
    form::{FormController, SubmitOutcome},
    validation::Field,
};

use crate::{errors::CliError, render};

pub(crate) mod check_id;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod show;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List products, optionally filtered by name
    List(list::ListArgs),

    /// Show a single product
    Show(show::ShowArgs),

    /// Create a product
    Create(create::CreateArgs),

    /// Change an existing product; its id cannot be changed
    Edit(edit::EditArgs),

    /// Delete a product after confirmation
    Delete(delete::DeleteArgs),

    /// Check whether a product id is still available
    CheckId(check_id::CheckIdArgs),
}

/// Run `command`, writing results to `out` and reading confirmations from `input`.
pub(crate) async fn run(
    command: Command,
    app: &AppContext,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<(), CliError> {
    match command {
        Command::List(args) => list::run(args, app, out).await,
        Command::Show(args) => show::run(args, app, out).await,
        Command::Create(args) => create::run(args, app, out).await,
        Command::Edit(args) => edit::run(args, app, out).await,
        Command::Delete(args) => delete::run(args, app, out, input).await,
        Command::CheckId(args) => check_id::run(args, app, out).await,
    }
}

/// Attributes shared by `create` and `edit`. Omitted values are left as they are.
#[derive(Debug, Default, Args)]
pub(crate) struct ProductFields {
    /// Product name (5-100 characters)
    #[arg(long)]
    pub(crate) name: Option<String>,

    /// Product description (10-200 characters)
    #[arg(long)]
    pub(crate) description: Option<String>,

    /// Logo URL or reference
    #[arg(long)]
    pub(crate) logo: Option<String>,

    /// Release date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) date_release: Option<String>,

    /// Revision date, exactly one year after release (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) date_revision: Option<String>,
}

impl ProductFields {
    fn into_changes(self) -> impl Iterator<Item = (Field, String)> {
        [
            (Field::Name, self.name),
            (Field::Description, self.description),
            (Field::Logo, self.logo),
            (Field::DateRelease, self.date_release),
            (Field::DateRevision, self.date_revision),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
    }
}

/// Feed `fields` into `form`, submit it and report the outcome.
async fn apply_and_submit(
    form: &mut FormController,
    fields: ProductFields,
    verb: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for (field, value) in fields.into_changes() {
        form.on_field_change(field, value)?;
    }

    match form.submit().await? {
        SubmitOutcome::Submitted(product) => {
            writeln!(out, "{verb} product {}", product.id)?;

            render::write_product(out, &product)?;

            Ok(())
        }
        SubmitOutcome::Invalid => {
            render::write_validation_errors(out, form)?;

            Err(CliError::Invalid)
        }
    }
}
