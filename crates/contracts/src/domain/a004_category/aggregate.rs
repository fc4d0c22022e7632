use crate::domain::common::{AuditInfo, RecordFlags};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория каталога. Дерево через `PadreCATID`; глубина и
/// отсутствие циклов этим слоем не проверяются.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Уникальный идентификатор категории
    #[serde(rename = "CATID")]
    pub cat_id: CategoryId,

    /// Родительская категория; None или пустая строка — корень
    #[serde(
        rename = "PadreCATID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub padre_cat_id: Option<String>,

    /// Наименование категории
    #[serde(rename = "DesCAT", default)]
    pub des_cat: String,

    #[serde(flatten)]
    pub flags: RecordFlags,

    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Category {
    /// Создать локальную запись категории из DTO
    pub fn new_for_insert(dto: &CategoryDto, user: &str) -> Self {
        Self {
            cat_id: CategoryId::new(dto.cat_id.clone()),
            padre_cat_id: dto.padre_cat_id.clone(),
            des_cat: dto.des_cat.clone(),
            flags: RecordFlags::new_active(),
            audit: AuditInfo::new(user),
        }
    }

    /// Категория верхнего уровня
    pub fn is_root(&self) -> bool {
        self.padre_cat_id
            .as_ref()
            .map_or(true, |p| p.trim().is_empty())
    }

    /// Наложить частичное обновление на локальную копию записи
    pub fn apply_patch(&mut self, patch: &CategoryPatch, user: &str) {
        if let Some(des_cat) = &patch.des_cat {
            self.des_cat = des_cat.clone();
        }
        if let Some(padre_cat_id) = &patch.padre_cat_id {
            self.padre_cat_id = Some(padre_cat_id.clone());
        }
        self.audit.touch(user);
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания категории (тело операции AddOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    #[serde(rename = "CATID")]
    pub cat_id: String,
    #[serde(rename = "PadreCATID", skip_serializing_if = "Option::is_none")]
    pub padre_cat_id: Option<String>,
    #[serde(rename = "DesCAT")]
    pub des_cat: String,
}

impl CategoryDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.cat_id.trim().is_empty() {
            return Err("El CATID no puede estar vacío".into());
        }
        if self.des_cat.trim().is_empty() {
            return Err("La descripción no puede estar vacía".into());
        }
        if self.padre_cat_id.as_deref() == Some(self.cat_id.as_str()) {
            return Err("La categoría no puede ser su propio padre".into());
        }
        Ok(())
    }
}

/// Частичное обновление категории (тело операции UpdateOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryPatch {
    #[serde(rename = "DesCAT", skip_serializing_if = "Option::is_none")]
    pub des_cat: Option<String>,
    #[serde(rename = "PadreCATID", skip_serializing_if = "Option::is_none")]
    pub padre_cat_id: Option<String>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.des_cat.is_none() && self.padre_cat_id.is_none()
    }
}
