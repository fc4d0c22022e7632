use crate::shared::api::envelope;
use crate::shared::api::query::QueryParams;
use crate::shared::api::rest_client::RestClient;
use catalog_contracts::domain::a004_category::{Category, CategoryDto, CategoryId, CategoryPatch};
use catalog_contracts::enums::ProcessType;
use std::sync::Arc;

const PATH: &str = "categories";

/// Сервис категорий каталога
#[derive(Clone)]
pub struct CategoryService {
    client: Arc<RestClient>,
}

impl CategoryService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Получить все категории
    pub async fn list_all(&self) -> anyhow::Result<Vec<Category>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Получить категорию по идентификатору
    pub async fn get_by_id(&self, id: &CategoryId) -> anyhow::Result<Option<Category>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetOne.code());
        params.set("CATID", id.value());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_record(raw))
    }

    /// Получить дочерние категории
    pub async fn list_children(&self, padre_cat_id: &str) -> anyhow::Result<Vec<Category>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());
        params.set("PadreCATID", padre_cat_id);

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Создать категорию
    pub async fn create(&self, dto: &CategoryDto) -> anyhow::Result<Option<Category>> {
        dto.validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::AddOne.code());

        let body = serde_json::to_value(dto)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Обновить категорию (частичный patch)
    pub async fn update(
        &self,
        id: &CategoryId,
        patch: &CategoryPatch,
    ) -> anyhow::Result<Option<Category>> {
        if patch.is_empty() {
            anyhow::bail!("Validation failed: actualización vacía");
        }
        if patch.padre_cat_id.as_deref() == Some(id.value()) {
            anyhow::bail!("Validation failed: la categoría no puede ser su propio padre");
        }

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::UpdateOne.code());
        params.set("CATID", id.value());

        let body = serde_json::to_value(patch)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Мягкое удаление категории
    pub async fn delete_logic(&self, id: &CategoryId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteLogic.code());
        params.set("CATID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Физическое удаление категории (необратимо)
    pub async fn delete_hard(&self, id: &CategoryId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteHard.code());
        params.set("CATID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Активировать категорию
    pub async fn activate(&self, id: &CategoryId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::ActivateOne.code());
        params.set("CATID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Деактивировать категорию
    pub async fn deactivate(&self, id: &CategoryId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeactivateOne.code());
        params.set("CATID", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }
}
