use crate::domain::common::{AuditInfo, RecordFlags};
use crate::enums::FileType;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор файла-вложения
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub String);

impl FileId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Payload kind
// ============================================================================

/// Вид полезной нагрузки файла: содержимое inline (data:) или
/// внешняя ссылка. Байты этим слоем не интерпретируются.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePayloadKind {
    Inline,
    Remote,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Файл-вложение презентации (изображение, документ, видео)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationFile {
    /// Уникальный идентификатор файла
    #[serde(rename = "IdArchivoOK")]
    pub id_archivo: FileId,

    /// Презентация-владелец (a002_presentation)
    #[serde(rename = "IdPresentaOK", default)]
    pub id_presenta: String,

    /// Код типа файла (image/pdf/doc/video/other); незнакомые коды
    /// допустимы на чтении
    #[serde(rename = "FileType", default)]
    pub file_type: String,

    /// Ссылка на содержимое: inline `data:`-контент у новых файлов,
    /// внешний URL у сохранённых
    #[serde(rename = "Archivo", default)]
    pub archivo: String,

    /// Основной файл презентации
    #[serde(rename = "Principal", default)]
    pub principal: bool,

    #[serde(flatten)]
    pub flags: RecordFlags,

    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl PresentationFile {
    /// Создать локальную запись файла из DTO
    pub fn new_for_insert(dto: &PresentationFileDto, user: &str) -> Self {
        Self {
            id_archivo: FileId::new(dto.id_archivo.clone()),
            id_presenta: dto.id_presenta.clone(),
            file_type: dto.file_type.clone(),
            archivo: dto.archivo.clone(),
            principal: dto.principal,
            flags: RecordFlags::new_active(),
            audit: AuditInfo::new(user),
        }
    }

    /// Типизированный тег файла; незнакомый код читается как Other
    pub fn kind(&self) -> FileType {
        FileType::from_code(&self.file_type).unwrap_or(FileType::Other)
    }

    /// Классификация полезной нагрузки по префиксу ссылки
    pub fn payload_kind(&self) -> FilePayloadKind {
        if self.archivo.starts_with("data:") {
            FilePayloadKind::Inline
        } else {
            FilePayloadKind::Remote
        }
    }

    /// Наложить частичное обновление на локальную копию записи
    pub fn apply_patch(&mut self, patch: &PresentationFilePatch, user: &str) {
        if let Some(file_type) = &patch.file_type {
            self.file_type = file_type.clone();
        }
        if let Some(archivo) = &patch.archivo {
            self.archivo = archivo.clone();
        }
        if let Some(principal) = patch.principal {
            self.principal = principal;
        }
        self.audit.touch(user);
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания файла (тело операции AddOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresentationFileDto {
    #[serde(rename = "IdArchivoOK")]
    pub id_archivo: String,
    #[serde(rename = "IdPresentaOK")]
    pub id_presenta: String,
    #[serde(rename = "FileType")]
    pub file_type: String,
    #[serde(rename = "Archivo")]
    pub archivo: String,
    #[serde(rename = "Principal", default)]
    pub principal: bool,
}

impl PresentationFileDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.id_archivo.trim().is_empty() {
            return Err("El IdArchivoOK no puede estar vacío".into());
        }
        if self.id_presenta.trim().is_empty() {
            return Err("El IdPresentaOK no puede estar vacío".into());
        }
        if self.archivo.trim().is_empty() {
            return Err("El archivo no puede estar vacío".into());
        }
        if FileType::from_code(&self.file_type).is_none() {
            return Err("Tipo de archivo desconocido".into());
        }
        Ok(())
    }
}

/// Частичное обновление файла (тело операции UpdateOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresentationFilePatch {
    #[serde(rename = "FileType", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(rename = "Archivo", skip_serializing_if = "Option::is_none")]
    pub archivo: Option<String>,
    #[serde(rename = "Principal", skip_serializing_if = "Option::is_none")]
    pub principal: Option<bool>,
}

impl PresentationFilePatch {
    pub fn is_empty(&self) -> bool {
        self.file_type.is_none() && self.archivo.is_none() && self.principal.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> PresentationFileDto {
        PresentationFileDto {
            id_archivo: "FILE-1".into(),
            id_presenta: "PRES-1".into(),
            file_type: "image".into(),
            archivo: "https://cdn.example.com/f/1.jpg".into(),
            principal: false,
        }
    }

    #[test]
    fn payload_kind_classifies_by_prefix() {
        let mut file = PresentationFile::new_for_insert(&sample_dto(), "admin");
        assert_eq!(file.payload_kind(), FilePayloadKind::Remote);

        file.archivo = "data:image/png;base64,iVBORw0KGgo=".into();
        assert_eq!(file.payload_kind(), FilePayloadKind::Inline);
    }

    #[test]
    fn unknown_file_type_reads_as_other() {
        let mut file = PresentationFile::new_for_insert(&sample_dto(), "admin");
        assert_eq!(file.kind(), FileType::Image);

        file.file_type = "webp-panorama".into();
        assert_eq!(file.kind(), FileType::Other);
    }

    #[test]
    fn validate_rejects_unknown_type_on_write() {
        let mut dto = sample_dto();
        assert!(dto.validate().is_ok());

        dto.file_type = "webp-panorama".into();
        assert!(dto.validate().is_err());

        dto.file_type = "pdf".into();
        dto.archivo = String::new();
        assert!(dto.validate().is_err());
    }
}
