//! Create Product Command

use std::io::Write;

use clap::Args;

use catalog_app::{context::AppContext, form::FormMode, validation::Field};

use crate::{
    commands::{ProductFields, apply_and_submit},
    errors::CliError,
};

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    /// Product id (3-10 characters, must not exist yet)
    #[arg(long)]
    pub(crate) id: Option<String>,

    #[command(flatten)]
    pub(crate) fields: ProductFields,
}

pub(crate) async fn run(
    args: CreateArgs,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut form = app.form_controller();

    form.initialize(FormMode::Create).await?;

    if let Some(id) = args.id {
        form.on_field_change(Field::Id, id)?;
    }

    apply_and_submit(&mut form, args.fields, "created", out).await
}
