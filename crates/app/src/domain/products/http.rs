//! HTTP client for the remote product store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::domain::products::{
    errors::ProductsRepositoryError,
    models::{Product, ProductId},
    repository::ProductsRepository,
};

/// Default product store address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3002/bp";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for connecting to the product store.
#[derive(Debug, Clone)]
pub struct HttpProductsConfig {
    /// Store address, e.g. `"http://localhost:3002/bp"`.
    pub base_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for HttpProductsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// [`ProductsRepository`] backed by the store's JSON API.
#[derive(Debug, Clone)]
pub struct HttpProductsRepository {
    base_url: Url,
    http: Client,
}

impl HttpProductsRepository {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot be parsed or cannot carry
    /// path segments, or when the HTTP client cannot be built.
    pub fn new(config: HttpProductsConfig) -> Result<Self, ProductsRepositoryError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|error| ProductsRepositoryError::InvalidBaseUrl(error.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ProductsRepositoryError::InvalidBaseUrl(config.base_url));
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { base_url, http })
    }

    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base_url.clone();

        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    fn products_url(&self) -> Url {
        self.url(["products"])
    }

    fn product_url(&self, id: &ProductId) -> Url {
        self.url(["products", id.as_str()])
    }

    fn verification_url(&self, id: &ProductId) -> Url {
        self.url(["products", "verification", id.as_str()])
    }
}

#[async_trait]
impl ProductsRepository for HttpProductsRepository {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsRepositoryError> {
        let response = self.http.get(self.products_url()).send().await?;

        let body: Envelope<Vec<Product>> = decode(response).await?;

        Ok(body.into_inner())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductsRepositoryError> {
        let response = self.http.get(self.product_url(id)).send().await?;

        let body: Envelope<Product> = decode(response).await?;

        Ok(body.into_inner())
    }

    async fn create_product(&self, product: Product) -> Result<Product, ProductsRepositoryError> {
        let response = self
            .http
            .post(self.products_url())
            .json(&product)
            .send()
            .await?;

        let body: Option<Envelope<Product>> = decode_optional(response).await?;

        Ok(body.map_or(product, Envelope::into_inner))
    }

    async fn update_product(
        &self,
        id: &ProductId,
        product: Product,
    ) -> Result<Product, ProductsRepositoryError> {
        let response = self
            .http
            .put(self.product_url(id))
            .json(&product)
            .send()
            .await?;

        let body: Option<Envelope<Product>> = decode_optional(response).await?;

        Ok(body.map_or(product, Envelope::into_inner))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductsRepositoryError> {
        let response = self.http.delete(self.product_url(id)).send().await?;

        ensure_success(response).await?;

        Ok(())
    }

    async fn check_id_exists(&self, id: &ProductId) -> Result<bool, ProductsRepositoryError> {
        let response = self.http.get(self.verification_url(id)).send().await?;

        decode(response).await
    }
}

/// Store responses either wrap their payload in `{"data": ...}` or return it bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, ProductsRepositoryError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    Err(ProductsRepositoryError::from_status(status, text))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProductsRepositoryError> {
    let text = ensure_success(response).await?.text().await?;

    parse_body(&text)
}

/// Decode a body that may legitimately carry no product, e.g. `{"message": "..."}`.
async fn decode_optional<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ProductsRepositoryError> {
    let text = ensure_success(response).await?.text().await?;

    match parse_body(&text) {
        Ok(body) => Ok(Some(body)),
        Err(error) => {
            debug!("response carried no product, keeping submitted record: {error}");

            Ok(None)
        }
    }
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ProductsRepositoryError> {
    serde_json::from_str(text).map_err(|error| {
        ProductsRepositoryError::UnexpectedResponse(format!("undecodable body ({error}): {text}"))
    })
}
