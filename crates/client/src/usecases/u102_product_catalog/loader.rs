use std::sync::Arc;

use anyhow::Result;

use crate::domain::a001_product::ProductService;
use crate::domain::a002_presentation::PresentationService;
use crate::shared::api::rest_client::RestClient;

use super::view::{compose, ProductView};

/// Загрузчик каталога товаров: собирает товары и их презентации
pub struct ProductCatalogLoader {
    products: ProductService,
    presentations: PresentationService,
}

impl ProductCatalogLoader {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            products: ProductService::new(Arc::clone(&client)),
            presentations: PresentationService::new(client),
        }
    }

    /// Загрузить весь каталог товаров
    pub async fn load_all(&self) -> Result<Vec<ProductView>> {
        let products = self.products.list_all().await?;
        let presentations = self.presentations.list_all().await?;

        tracing::info!(
            products = products.len(),
            presentations = presentations.len(),
            "Product catalog loaded"
        );

        Ok(compose(products, presentations))
    }

    /// Загрузить товары одной категории вместе с презентациями
    pub async fn load_by_category(&self, cat_id: &str) -> Result<Vec<ProductView>> {
        let products = self.products.list_by_category(cat_id).await?;
        let presentations = self.presentations.list_all().await?;

        tracing::info!(
            cat_id,
            products = products.len(),
            "Category products loaded"
        );

        Ok(compose(products, presentations))
    }
}
