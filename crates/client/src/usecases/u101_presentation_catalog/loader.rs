use std::sync::Arc;

use anyhow::Result;

use crate::domain::a002_presentation::PresentationService;
use crate::domain::a003_presentation_file::PresentationFileService;
use crate::domain::a005_price_list::PriceListService;
use crate::shared::api::rest_client::RestClient;

use super::view::{compose, PresentationView};

/// Загрузчик каталога презентаций: собирает презентации,
/// их файлы и цены в готовые представления
pub struct PresentationCatalogLoader {
    presentations: PresentationService,
    files: PresentationFileService,
    price_lists: PriceListService,
}

impl PresentationCatalogLoader {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            presentations: PresentationService::new(Arc::clone(&client)),
            files: PresentationFileService::new(Arc::clone(&client)),
            price_lists: PriceListService::new(client),
        }
    }

    /// Загрузить весь каталог презентаций
    pub async fn load_all(&self) -> Result<Vec<PresentationView>> {
        let presentations = self.presentations.list_all().await?;
        let files = self.files.list_all().await?;
        let price_lists = self.price_lists.list_all().await?;

        tracing::info!(
            presentations = presentations.len(),
            files = files.len(),
            price_lists = price_lists.len(),
            "Presentation catalog loaded"
        );

        Ok(compose(presentations, files, price_lists))
    }

    /// Загрузить презентации одного товара вместе с файлами и ценами
    pub async fn load_for_product(&self, sku_id: &str) -> Result<Vec<PresentationView>> {
        let presentations = self.presentations.list_by_product(sku_id).await?;

        let mut files = Vec::new();
        for presentation in &presentations {
            let mut batch = self
                .files
                .list_by_presentation(presentation.id_presenta.value())
                .await?;
            files.append(&mut batch);
        }

        let price_lists = self.price_lists.list_all().await?;

        tracing::info!(
            sku_id,
            presentations = presentations.len(),
            files = files.len(),
            "Product presentations loaded"
        );

        Ok(compose(presentations, files, price_lists))
    }
}
