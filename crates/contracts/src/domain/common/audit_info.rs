use serde::{Deserialize, Serialize};

/// Аудит записи: кто и когда создал/изменил.
///
/// Бэкенд присылает блок не всегда целиком, поэтому все поля
/// опциональны при чтении.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuditInfo {
    /// Пользователь, создавший запись
    #[serde(rename = "REGUSER", default, skip_serializing_if = "Option::is_none")]
    pub reg_user: Option<String>,

    /// Дата создания записи
    #[serde(rename = "REGDATE", default, skip_serializing_if = "Option::is_none")]
    pub reg_date: Option<chrono::DateTime<chrono::Utc>>,

    /// Пользователь последнего изменения
    #[serde(rename = "MODUSER", default, skip_serializing_if = "Option::is_none")]
    pub mod_user: Option<String>,

    /// Дата последнего изменения
    #[serde(rename = "MODDATE", default, skip_serializing_if = "Option::is_none")]
    pub mod_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl AuditInfo {
    /// Создать блок аудита для новой записи
    pub fn new(user: &str) -> Self {
        Self {
            reg_user: Some(user.to_string()),
            reg_date: Some(chrono::Utc::now()),
            mod_user: None,
            mod_date: None,
        }
    }

    /// Отметить изменение записи
    pub fn touch(&mut self, user: &str) {
        self.mod_user = Some(user.to_string());
        self.mod_date = Some(chrono::Utc::now());
    }
}
