use crate::domain::common::{AuditInfo, RecordFlags};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный SKU товара каталога
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
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

/// Товар каталога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Уникальный SKU товара
    #[serde(rename = "SKUID")]
    pub sku_id: ProductId,

    /// Наименование товара
    #[serde(rename = "DesSKU", default)]
    pub des_sku: String,

    /// Бренд
    #[serde(rename = "Marca", default, skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,

    /// Штрихкод
    #[serde(
        rename = "CodigoBarras",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub codigo_barras: Option<String>,

    /// Ссылки на категории (a004_category)
    #[serde(rename = "CATIDs", default)]
    pub cat_ids: Vec<String>,

    #[serde(flatten)]
    pub flags: RecordFlags,

    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Product {
    /// Создать локальную запись товара из DTO (когда бэкенд
    /// подтвердил создание без тела ответа)
    pub fn new_for_insert(dto: &ProductDto, user: &str) -> Self {
        Self {
            sku_id: ProductId::new(dto.sku_id.clone()),
            des_sku: dto.des_sku.clone(),
            marca: dto.marca.clone(),
            codigo_barras: dto.codigo_barras.clone(),
            cat_ids: dto.cat_ids.clone(),
            flags: RecordFlags::new_active(),
            audit: AuditInfo::new(user),
        }
    }

    /// Наложить частичное обновление на локальную копию записи
    pub fn apply_patch(&mut self, patch: &ProductPatch, user: &str) {
        if let Some(des_sku) = &patch.des_sku {
            self.des_sku = des_sku.clone();
        }
        if let Some(marca) = &patch.marca {
            self.marca = Some(marca.clone());
        }
        if let Some(codigo_barras) = &patch.codigo_barras {
            self.codigo_barras = Some(codigo_barras.clone());
        }
        if let Some(cat_ids) = &patch.cat_ids {
            self.cat_ids = cat_ids.clone();
        }
        self.audit.touch(user);
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания товара (тело операции AddOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    #[serde(rename = "SKUID")]
    pub sku_id: String,
    #[serde(rename = "DesSKU")]
    pub des_sku: String,
    #[serde(rename = "Marca", skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(rename = "CodigoBarras", skip_serializing_if = "Option::is_none")]
    pub codigo_barras: Option<String>,
    #[serde(rename = "CATIDs", default)]
    pub cat_ids: Vec<String>,
}

impl ProductDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.sku_id.trim().is_empty() {
            return Err("El SKUID no puede estar vacío".into());
        }
        if self.des_sku.trim().is_empty() {
            return Err("La descripción no puede estar vacía".into());
        }
        if self.cat_ids.iter().any(|c| c.trim().is_empty()) {
            return Err("Referencia de categoría vacía".into());
        }
        Ok(())
    }
}

/// Частичное обновление товара (тело операции UpdateOne).
/// Отсутствующие поля не сериализуются и не трогаются бэкендом.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductPatch {
    #[serde(rename = "DesSKU", skip_serializing_if = "Option::is_none")]
    pub des_sku: Option<String>,
    #[serde(rename = "Marca", skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(rename = "CodigoBarras", skip_serializing_if = "Option::is_none")]
    pub codigo_barras: Option<String>,
    #[serde(rename = "CATIDs", skip_serializing_if = "Option::is_none")]
    pub cat_ids: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.des_sku.is_none()
            && self.marca.is_none()
            && self.codigo_barras.is_none()
            && self.cat_ids.is_none()
    }
}
