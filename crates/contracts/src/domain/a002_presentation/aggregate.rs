use crate::domain::common::{AuditInfo, RecordFlags};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор презентации (варианта товара)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentationId(pub String);

impl PresentationId {
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

/// Презентация — продаваемый вариант товара (размер, цвет и т.п.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    /// Уникальный идентификатор презентации
    #[serde(rename = "IdPresentaOK")]
    pub id_presenta: PresentationId,

    /// SKU родительского товара (a001_product)
    #[serde(rename = "SKUID", default)]
    pub sku_id: String,

    /// Наименование презентации
    #[serde(rename = "DesPresenta", default)]
    pub des_presenta: String,

    /// Произвольные свойства варианта, сериализованные в JSON-текст
    /// (бэкенд хранит поле как строку)
    #[serde(rename = "Propiedades", default)]
    pub propiedades: String,

    #[serde(flatten)]
    pub flags: RecordFlags,

    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Presentation {
    /// Создать локальную запись презентации из DTO
    pub fn new_for_insert(dto: &PresentationDto, user: &str) -> Self {
        Self {
            id_presenta: PresentationId::new(dto.id_presenta.clone()),
            sku_id: dto.sku_id.clone(),
            des_presenta: dto.des_presenta.clone(),
            propiedades: dto.propiedades.clone().unwrap_or_default(),
            flags: RecordFlags::new_active(),
            audit: AuditInfo::new(user),
        }
    }

    /// Распарсить `Propiedades` в словарь. Пустое или битое поле
    /// даёт пустой словарь, не ошибку.
    pub fn properties(&self) -> HashMap<String, serde_json::Value> {
        if self.propiedades.trim().is_empty() {
            return HashMap::new();
        }
        serde_json::from_str(&self.propiedades).unwrap_or_default()
    }

    /// Сериализовать словарь свойств обратно в `Propiedades`
    pub fn set_properties(
        &mut self,
        properties: &HashMap<String, serde_json::Value>,
    ) -> Result<(), String> {
        self.propiedades =
            serde_json::to_string(properties).map_err(|e| format!("Propiedades: {}", e))?;
        Ok(())
    }

    /// Наложить частичное обновление на локальную копию записи
    pub fn apply_patch(&mut self, patch: &PresentationPatch, user: &str) {
        if let Some(des_presenta) = &patch.des_presenta {
            self.des_presenta = des_presenta.clone();
        }
        if let Some(propiedades) = &patch.propiedades {
            self.propiedades = propiedades.clone();
        }
        self.audit.touch(user);
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания презентации (тело операции AddOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresentationDto {
    #[serde(rename = "IdPresentaOK")]
    pub id_presenta: String,
    #[serde(rename = "SKUID")]
    pub sku_id: String,
    #[serde(rename = "DesPresenta")]
    pub des_presenta: String,
    #[serde(rename = "Propiedades", skip_serializing_if = "Option::is_none")]
    pub propiedades: Option<String>,
}

impl PresentationDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.id_presenta.trim().is_empty() {
            return Err("El IdPresentaOK no puede estar vacío".into());
        }
        if self.sku_id.trim().is_empty() {
            return Err("El SKUID no puede estar vacío".into());
        }
        if self.des_presenta.trim().is_empty() {
            return Err("La descripción no puede estar vacía".into());
        }
        if let Some(propiedades) = &self.propiedades {
            if !propiedades.trim().is_empty()
                && serde_json::from_str::<HashMap<String, serde_json::Value>>(propiedades).is_err()
            {
                return Err("Propiedades no es un JSON válido".into());
            }
        }
        Ok(())
    }
}

/// Частичное обновление презентации (тело операции UpdateOne)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresentationPatch {
    #[serde(rename = "DesPresenta", skip_serializing_if = "Option::is_none")]
    pub des_presenta: Option<String>,
    #[serde(rename = "Propiedades", skip_serializing_if = "Option::is_none")]
    pub propiedades: Option<String>,
}

impl PresentationPatch {
    pub fn is_empty(&self) -> bool {
        self.des_presenta.is_none() && self.propiedades.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_tolerates_empty_and_malformed_text() {
        let dto = PresentationDto {
            id_presenta: "PRES-1".into(),
            sku_id: "SKU-1".into(),
            des_presenta: "Rojo / M".into(),
            propiedades: None,
        };
        let mut presentation = Presentation::new_for_insert(&dto, "admin");
        assert!(presentation.properties().is_empty());

        presentation.propiedades = "{not json".into();
        assert!(presentation.properties().is_empty());
    }

    #[test]
    fn properties_roundtrip() {
        let dto = PresentationDto {
            id_presenta: "PRES-1".into(),
            sku_id: "SKU-1".into(),
            des_presenta: "Rojo / M".into(),
            propiedades: None,
        };
        let mut presentation = Presentation::new_for_insert(&dto, "admin");

        let mut props = HashMap::new();
        props.insert("color".to_string(), serde_json::json!("rojo"));
        props.insert("talla".to_string(), serde_json::json!("M"));
        presentation.set_properties(&props).unwrap();

        let parsed = presentation.properties();
        assert_eq!(parsed.get("color"), Some(&serde_json::json!("rojo")));
        assert_eq!(parsed.get("talla"), Some(&serde_json::json!("M")));
    }

    #[test]
    fn validate_rejects_malformed_properties() {
        let mut dto = PresentationDto {
            id_presenta: "PRES-1".into(),
            sku_id: "SKU-1".into(),
            des_presenta: "Rojo / M".into(),
            propiedades: Some(r#"{"color":"rojo"}"#.into()),
        };
        assert!(dto.validate().is_ok());

        dto.propiedades = Some("{{".into());
        assert!(dto.validate().is_err());

        dto.propiedades = None;
        dto.sku_id = String::new();
        assert!(dto.validate().is_err());
    }
}
