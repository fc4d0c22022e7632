use crate::shared::api::envelope;
use crate::shared::api::query::QueryParams;
use crate::shared::api::rest_client::RestClient;
use catalog_contracts::domain::a001_product::{Product, ProductDto, ProductId, ProductPatch};
use catalog_contracts::enums::ProcessType;
use std::sync::Arc;

const PATH: &str = "products";

/// Сервис товаров каталога
#[derive(Clone)]
pub struct ProductService {
    client: Arc<RestClient>,
}

impl ProductService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Получить все товары
    pub async fn list_all(&self) -> anyhow::Result<Vec<Product>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Получить товар по SKUID
    pub async fn get_by_id(&self, id: &ProductId) -> anyhow::Result<Option<Product>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetOne.code());
        params.set("SKUID", id.value());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_record(raw))
    }

    /// Получить товары категории
    pub async fn list_by_category(&self, cat_id: &str) -> anyhow::Result<Vec<Product>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());
        params.set("CATID", cat_id);

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Создать товар
    pub async fn create(&self, dto: &ProductDto) -> anyhow::Result<Option<Product>> {
        dto.validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::AddOne.code());

        let body = serde_json::to_value(dto)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Обновить товар (частичный patch)
    pub async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> anyhow::Result<Option<Product>> {
        if patch.is_empty() {
            anyhow::bail!("Validation failed: actualización vacía");
        }

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::UpdateOne.code());
        params.set("SKUID", id.value());

        let body = serde_json::to_value(patch)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Мягкое удаление товара
    pub async fn delete_logic(&self, id: &ProductId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteLogic.code());
        params.set("SKUID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Физическое удаление товара (необратимо)
    pub async fn delete_hard(&self, id: &ProductId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteHard.code());
        params.set("SKUID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Активировать товар
    pub async fn activate(&self, id: &ProductId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::ActivateOne.code());
        params.set("SKUID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Деактивировать товар
    pub async fn deactivate(&self, id: &ProductId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeactivateOne.code());
        params.set("SKUID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }
}
