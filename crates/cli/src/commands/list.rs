//! List Products Command

use std::{io::Write, num::NonZeroUsize};

use clap::Args;

use catalog_app::{context::AppContext, listing::PageSize};

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Only show products whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub(crate) search: Option<String>,

    /// Maximum number of products to show [default: 5]
    #[arg(short = 'n', long)]
    pub(crate) page_size: Option<NonZeroUsize>,
}

pub(crate) async fn run(
    args: ListArgs,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut list = app.list_controller();

    list.load().await?;

    if let Some(search) = args.search {
        list.set_search_term(search);
    }

    if let Some(page_size) = args.page_size {
        list.set_page_size(PageSize::from(page_size));
    }

    render::write_product_table(out, &list.filtered_products(), list.matching_count())?;

    Ok(())
}
