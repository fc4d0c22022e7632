use serde::{Deserialize, Serialize};

/// Флаги жизненного цикла записи (`ACTIVED` / `DELETED`).
///
/// На чтении флаги независимы и допускается любая комбинация
/// (исторические данные бэкенда). Локальные переходы комбинацию
/// `ACTIVED && DELETED` не порождают.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordFlags {
    /// Запись активна
    #[serde(rename = "ACTIVED", default)]
    pub actived: bool,

    /// Запись помечена на удаление (soft delete)
    #[serde(rename = "DELETED", default)]
    pub deleted: bool,
}

impl RecordFlags {
    /// Флаги новой записи: активна, не удалена
    pub fn new_active() -> Self {
        Self {
            actived: true,
            deleted: false,
        }
    }

    pub fn activate(&mut self) {
        self.actived = true;
        self.deleted = false;
    }

    pub fn deactivate(&mut self) {
        self.actived = false;
    }

    /// Пометить на удаление
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.actived = false;
    }

    /// Запись видима в рабочих списках
    pub fn is_live(&self) -> bool {
        self.actived && !self.deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_never_produce_actived_and_deleted() {
        let mut flags = RecordFlags::new_active();
        assert!(flags.is_live());

        flags.mark_deleted();
        assert!(flags.deleted);
        assert!(!flags.actived);

        flags.activate();
        assert!(flags.actived);
        assert!(!flags.deleted);

        flags.deactivate();
        assert!(!flags.actived);
        assert!(!flags.deleted);
    }

    #[test]
    fn tolerates_missing_fields_on_read() {
        let flags: RecordFlags = serde_json::from_str("{}").unwrap();
        assert!(!flags.actived);
        assert!(!flags.deleted);
    }
}
