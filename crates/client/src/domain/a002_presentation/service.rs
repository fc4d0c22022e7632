use crate::shared::api::envelope;
use crate::shared::api::query::QueryParams;
use crate::shared::api::rest_client::RestClient;
use catalog_contracts::domain::a002_presentation::{
    Presentation, PresentationDto, PresentationId, PresentationPatch,
};
use catalog_contracts::enums::ProcessType;
use std::sync::Arc;

const PATH: &str = "presentations";

/// Сервис презентаций (вариантов товара)
#[derive(Clone)]
pub struct PresentationService {
    client: Arc<RestClient>,
}

impl PresentationService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Получить все презентации
    pub async fn list_all(&self) -> anyhow::Result<Vec<Presentation>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Получить презентацию по идентификатору
    pub async fn get_by_id(&self, id: &PresentationId) -> anyhow::Result<Option<Presentation>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetOne.code());
        params.set("IdPresentaOK", id.value());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_record(raw))
    }

    /// Получить презентации товара
    pub async fn list_by_product(&self, sku_id: &str) -> anyhow::Result<Vec<Presentation>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());
        params.set("SKUID", sku_id);

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Создать презентацию
    pub async fn create(&self, dto: &PresentationDto) -> anyhow::Result<Option<Presentation>> {
        dto.validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::AddOne.code());

        let body = serde_json::to_value(dto)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Обновить презентацию (частичный patch)
    pub async fn update(
        &self,
        id: &PresentationId,
        patch: &PresentationPatch,
    ) -> anyhow::Result<Option<Presentation>> {
        if patch.is_empty() {
            anyhow::bail!("Validation failed: actualización vacía");
        }

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::UpdateOne.code());
        params.set("IdPresentaOK", id.value());

        let body = serde_json::to_value(patch)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Мягкое удаление презентации
    pub async fn delete_logic(&self, id: &PresentationId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteLogic.code());
        params.set("IdPresentaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Физическое удаление презентации (необратимо)
    pub async fn delete_hard(&self, id: &PresentationId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteHard.code());
        params.set("IdPresentaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Активировать презентацию
    pub async fn activate(&self, id: &PresentationId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::ActivateOne.code());
        params.set("IdPresentaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Деактивировать презентацию
    pub async fn deactivate(&self, id: &PresentationId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeactivateOne.code());
        params.set("IdPresentaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Деактивировать все презентации товара одним вызовом
    pub async fn deactivate_by_product(&self, sku_id: &str) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeactivateMany.code());
        params.set("SKUID", sku_id);

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }
}
