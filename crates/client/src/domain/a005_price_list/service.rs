use crate::shared::api::envelope;
use crate::shared::api::query::QueryParams;
use crate::shared::api::rest_client::RestClient;
use catalog_contracts::domain::a005_price_list::{
    PriceList, PriceListDto, PriceListId, PriceListPatch,
};
use catalog_contracts::enums::ProcessType;
use std::sync::Arc;

const PATH: &str = "price-lists";

/// Сервис листов цен
#[derive(Clone)]
pub struct PriceListService {
    client: Arc<RestClient>,
}

impl PriceListService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Получить все листы цен
    pub async fn list_all(&self) -> anyhow::Result<Vec<PriceList>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Получить лист цен по идентификатору
    pub async fn get_by_id(&self, id: &PriceListId) -> anyhow::Result<Option<PriceList>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetOne.code());
        params.set("IdListaOK", id.value());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_record(raw))
    }

    /// Получить листы, содержащие позицию по презентации
    pub async fn list_by_presentation(&self, id_presenta: &str) -> anyhow::Result<Vec<PriceList>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());
        params.set("IdPresentaOK", id_presenta);

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Создать лист цен
    pub async fn create(&self, dto: &PriceListDto) -> anyhow::Result<Option<PriceList>> {
        dto.validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::AddOne.code());

        let body = serde_json::to_value(dto)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Обновить лист цен (частичный patch; позиции заменяются целиком)
    pub async fn update(
        &self,
        id: &PriceListId,
        patch: &PriceListPatch,
    ) -> anyhow::Result<Option<PriceList>> {
        if patch.is_empty() {
            anyhow::bail!("Validation failed: actualización vacía");
        }
        if let Some(precios) = &patch.precios {
            if precios.iter().any(|e| e.precio < 0.0) {
                anyhow::bail!("Validation failed: el precio no puede ser negativo");
            }
        }

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::UpdateOne.code());
        params.set("IdListaOK", id.value());

        let body = serde_json::to_value(patch)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Мягкое удаление листа цен
    pub async fn delete_logic(&self, id: &PriceListId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteLogic.code());
        params.set("IdListaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Физическое удаление листа цен (необратимо)
    pub async fn delete_hard(&self, id: &PriceListId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteHard.code());
        params.set("IdListaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Активировать лист цен
    pub async fn activate(&self, id: &PriceListId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::ActivateOne.code());
        params.set("IdListaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Деактивировать лист цен
    pub async fn deactivate(&self, id: &PriceListId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeactivateOne.code());
        params.set("IdListaOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }
}
