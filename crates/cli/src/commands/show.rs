//! Show Product Command

use std::io::Write;

use clap::Args;

use catalog_app::{context::AppContext, domain::products::models::ProductId};

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Product id
    pub(crate) id: String,
}

pub(crate) async fn run(
    args: ShowArgs,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut detail = app.detail_controller();

    let product = detail.load(&ProductId::new(args.id)).await?;

    render::write_product(out, product)?;

    Ok(())
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

    #[tokio::test]
    async fn test_show_prints_product() -> TestResult {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_get_product()
            .once()
            .withf(|id| id.as_str() == "abc")
            .return_once(|_| Ok(make_product("abc", "Test Product")));

        let (result, output) = run_captured(
            Command::Show(ShowArgs {
                id: "abc".to_string(),
            }),
            repository,
        )
        .await;

        result?;

        assert!(output.contains("Test Product"), "{output}");
        assert!(output.contains("2024-06-27"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_missing_product_is_not_found() {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsRepositoryError::NotFound));

        let (result, _) = run_captured(
            Command::Show(ShowArgs {
                id: "nope".to_string(),
            }),
            repository,
        )
        .await;

        assert!(
            matches!(result, Err(CliError::Detail(DetailError::RecordNotFound(_)))),
            "expected not found, got {result:?}"
        );
    }
}
