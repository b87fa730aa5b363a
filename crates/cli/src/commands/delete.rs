//! Delete Product Command

use std::io::{BufRead, Write};

use clap::Args;

use catalog_app::{context::AppContext, domain::products::models::ProductId};

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Id of the product to delete
    pub(crate) id: String,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub(crate) yes: bool,
}

pub(crate) async fn run(
    args: DeleteArgs,
    app: &AppContext,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<(), CliError> {
    let mut detail = app.detail_controller();
    let id = ProductId::new(args.id);

    let product = detail.load(&id).await?;

    render::write_product(out, product)?;

    detail.request_delete()?;

    if !args.yes && !confirm(out, input, &id)? {
        detail.cancel_delete();

        writeln!(out, "cancelled")?;

        return Ok(());
    }

    if detail.confirm_delete().await? {
        writeln!(out, "deleted product {id}")?;
    }

    Ok(())
}

fn confirm(
    out: &mut impl Write,
    input: &mut impl BufRead,
    id: &ProductId,
) -> Result<bool, CliError> {
    write!(out, "Delete product {id}? [y/N] ")?;
    out.flush()?;

    let mut answer = String::new();

    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use catalog_app::{
        detail::DetailError,
        domain::products::{MockProductsRepository, ProductsRepositoryError},
    };

    use crate::commands::{Command, tests::*};

    use super::*;

    fn serving_abc() -> MockProductsRepository {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_get_product()
            .once()
            .return_once(|_| Ok(make_product("abc", "Test Product")));

        repository
    }

    fn delete_abc(yes: bool) -> Command {
        Command::Delete(DeleteArgs {
            id: "abc".to_string(),
            yes,
        })
    }

    #[tokio::test]
    async fn test_delete_confirmed_at_prompt() -> TestResult {
        let mut repository = serving_abc();

        repository
            .expect_delete_product()
            .once()
            .withf(|id| id.as_str() == "abc")
            .return_once(|_| Ok(()));

        let (result, output) = run_with_input(delete_abc(false), repository, "y\n").await;

        result?;

        assert!(output.contains("Delete product abc? [y/N]"), "{output}");
        assert!(output.contains("deleted product abc"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() -> TestResult {
        let mut repository = serving_abc();

        repository.expect_delete_product().never();

        let (result, output) = run_with_input(delete_abc(false), repository, "\n").await;

        result?;

        assert!(output.ends_with("cancelled\n"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_with_yes_skips_prompt() -> TestResult {
        let mut repository = serving_abc();

        repository
            .expect_delete_product()
            .once()
            .return_once(|_| Ok(()));

        let (result, output) = run_captured(delete_abc(true), repository).await;

        result?;

        assert!(!output.contains("[y/N]"), "{output}");
        assert!(output.contains("deleted product abc"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_failure_is_reported() {
        let mut repository = serving_abc();

        repository
            .expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsRepositoryError::UnexpectedResponse("boom".into())));

        let (result, _) = run_captured(delete_abc(true), repository).await;

        assert!(
            matches!(result, Err(CliError::Detail(DetailError::MutationFailed { .. }))),
            "expected mutation failure, got {result:?}"
        );
    }
}
