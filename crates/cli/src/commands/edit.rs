//! Edit Product Command

use std::io::Write;

use clap::Args;

use catalog_app::{context::AppContext, domain::products::models::ProductId, form::FormMode};

use crate::{
    commands::{ProductFields, apply_and_submit},
    errors::CliError,
};

#[derive(Debug, Args)]
pub(crate) struct EditArgs {
    /// Id of the product to change
    pub(crate) id: String,

    #[command(flatten)]
    pub(crate) fields: ProductFields,
}

pub(crate) async fn run(
    args: EditArgs,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut form = app.form_controller();

    form.initialize(FormMode::Edit(ProductId::new(args.id)))
        .await?;

    apply_and_submit(&mut form, args.fields, "updated", out).await
}
