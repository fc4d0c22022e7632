use crate::shared::api::envelope;
use crate::shared::api::query::QueryParams;
use crate::shared::api::rest_client::RestClient;
use catalog_contracts::domain::a003_presentation_file::{
    FileId, PresentationFile, PresentationFileDto, PresentationFilePatch,
};
use catalog_contracts::enums::ProcessType;
use std::sync::Arc;

const PATH: &str = "files";

/// Сервис файлов-вложений презентаций
#[derive(Clone)]
pub struct PresentationFileService {
    client: Arc<RestClient>,
}

impl PresentationFileService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Получить все файлы
    pub async fn list_all(&self) -> anyhow::Result<Vec<PresentationFile>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Получить файл по идентификатору
    pub async fn get_by_id(&self, id: &FileId) -> anyhow::Result<Option<PresentationFile>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetOne.code());
        params.set("IdArchivoOK", id.value());

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_record(raw))
    }

    /// Получить файлы презентации
    pub async fn list_by_presentation(
        &self,
        id_presenta: &str,
    ) -> anyhow::Result<Vec<PresentationFile>> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::GetAll.code());
        params.set("IdPresentaOK", id_presenta);

        let raw = self.client.execute(PATH, params, None).await?;
        Ok(envelope::to_list(raw))
    }

    /// Создать файл
    pub async fn create(
        &self,
        dto: &PresentationFileDto,
    ) -> anyhow::Result<Option<PresentationFile>> {
        dto.validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::AddOne.code());

        let body = serde_json::to_value(dto)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Обновить файл (частичный patch)
    pub async fn update(
        &self,
        id: &FileId,
        patch: &PresentationFilePatch,
    ) -> anyhow::Result<Option<PresentationFile>> {
        if patch.is_empty() {
            anyhow::bail!("Validation failed: actualización vacía");
        }

        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::UpdateOne.code());
        params.set("IdArchivoOK", id.value());

        let body = serde_json::to_value(patch)?;
        let raw = self.client.execute(PATH, params, Some(body)).await?;
        Ok(envelope::to_record(raw))
    }

    /// Назначить файл основным для его презентации; бэкенд снимает
    /// флаг с остальных файлов
    pub async fn set_principal(&self, id: &FileId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::SetPrincipal.code());
        params.set("IdArchivoOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Мягкое удаление файла
    pub async fn delete_logic(&self, id: &FileId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteLogic.code());
        params.set("IdArchivoOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Физическое удаление файла (необратимо)
    pub async fn delete_hard(&self, id: &FileId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeleteHard.code());
        params.set("IdArchivoOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Активировать файл
    pub async fn activate(&self, id: &FileId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::ActivateOne.code());
        params.set("IdArchivoOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }

    /// Деактивировать файл
    pub async fn deactivate(&self, id: &FileId) -> anyhow::Result<()> {
        let mut params = QueryParams::new();
        params.set("ProcessType", ProcessType::DeactivateOne.code());
        params.set("IdArchivoOK", id.value());

        self.client.execute(PATH, params, None).await?;
        Ok(())
    }
}
