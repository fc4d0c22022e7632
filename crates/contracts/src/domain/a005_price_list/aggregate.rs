use crate::domain::common::{AuditInfo, RecordFlags};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор листа цен
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceListId(pub String);

impl PriceListId {
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

/// Лист цен: набор цен по презентациям
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceList {
    /// Уникальный идентификатор листа
    #[serde(rename = "IdListaOK")]
    pub id_lista: PriceListId,

    /// Наименование листа
    #[serde(rename = "DesLista", default)]
    pub des_lista: String,

    /// Позиции листа
    #[serde(rename = "Precios", default)]
    pub precios: Vec<PriceEntry>,

    #[serde(flatten)]
    pub flags: RecordFlags,

    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// Позиция листа цен
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Презентация (a002_presentation)
    #[serde(rename = "IdPresentaOK")]
    pub id_presenta: String,

    /// Цена; бэкенд присылает число или строку
    #[serde(rename = "Precio", deserialize_with = "deserialize_precio")]
    pub precio: f64,
}

/// Десериализует цену из строки или числа в f64
fn deserialize_precio<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Deserialize};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrFloat {
        String(String),
        Float(f64),
    }

    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(s) => s.trim().parse::<f64>().map_err(de::Error::custom),
        StringOrFloat::Float(f) => Ok(f),
    }
}

impl PriceList {
    /// Создать локальную запись листа из DTO
    pub fn new_for_insert(dto: &PriceListDto, user: &str) -> Self {
        Self {
            id_lista: PriceListId::new(dto.id_lista.clone()),
            des_lista: dto.des_lista.clone(),
            precios: dto.precios.clone(),
            flags: RecordFlags::new_active(),
            audit: AuditInfo::new(user),
        }
    }

    /// Цена презентации в этом листе (первое совпадение)
    pub fn price_for(&self, id_presenta: &str) -> Option<f64> {
        self.precios
            .iter()
            .find(|e| e.id_presenta == id_presenta)
            .map(|e| e.precio)
    }

    /// Наложить частичное обновление на локальную копию записи
    pub fn apply_patch(&mut self, patch: &PriceListPatch, user: &str) {
        if let Some(des_lista) = &patch.des_lista {
            self.des_lista = des_lista.clone();
        }
        if let Some(precios) = &patch.precios {
            self.precios = precios.clone();
        }
        self.audit.touch(user);
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания листа цен (тело операции AddOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PriceListDto {
    #[serde(rename = "IdListaOK")]
    pub id_lista: String,
    #[serde(rename = "DesLista")]
    pub des_lista: String,
    #[serde(rename = "Precios", default)]
    pub precios: Vec<PriceEntry>,
}

impl PriceListDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.id_lista.trim().is_empty() {
            return Err("El IdListaOK no puede estar vacío".into());
        }
        if self.des_lista.trim().is_empty() {
            return Err("La descripción no puede estar vacía".into());
        }
        for entry in &self.precios {
            if entry.id_presenta.trim().is_empty() {
                return Err("Posición sin IdPresentaOK".into());
            }
            if entry.precio < 0.0 {
                return Err("El precio no puede ser negativo".into());
            }
        }
        Ok(())
    }
}

/// Частичное обновление листа цен (тело операции UpdateOne).
/// `Precios` заменяется целиком.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PriceListPatch {
    #[serde(rename = "DesLista", skip_serializing_if = "Option::is_none")]
    pub des_lista: Option<String>,
    #[serde(rename = "Precios", skip_serializing_if = "Option::is_none")]
    pub precios: Option<Vec<PriceEntry>>,
}

impl PriceListPatch {
    pub fn is_empty(&self) -> bool {
        self.des_lista.is_none() && self.precios.is_none()
    }
}
