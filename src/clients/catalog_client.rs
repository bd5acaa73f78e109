use crate::models::session::{parse_catalog, Catalog};

// Where the session catalog comes from. Loops and the CLI only depend
// on this seam, so tests can feed catalogs in without any I/O.
pub trait CatalogSource {
    async fn load(&self) -> Result<Catalog, Box<dyn std::error::Error + Send + Sync>>;
}

pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<Catalog, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(format!("Failed to load catalog: {}", response.status()).into());
        }
        let raw = response.text().await?;
        Ok(parse_catalog(&raw)?)
    }
}

pub struct FileCatalogSource {
    path: String,
}

impl FileCatalogSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Catalog, Box<dyn std::error::Error + Send + Sync>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(parse_catalog(&raw)?)
    }
}

// Runtime selection between the two sources, driven by configuration.
pub enum DataSource {
    Http(HttpCatalogSource),
    File(FileCatalogSource),
}

impl CatalogSource for DataSource {
    async fn load(&self) -> Result<Catalog, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            DataSource::Http(source) => source.load().await,
            DataSource::File(source) => source.load().await,
        }
    }
}
