use serde::{Deserialize, Serialize};

/// Типы операций протокола (параметр `ProcessType` в каждом запросе)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessType {
    GetAll,
    GetOne,
    AddOne,
    UpdateOne,
    DeleteLogic,
    DeleteHard,
    ActivateOne,
    DeactivateOne,
    DeactivateMany,
    SetPrincipal,
}

impl ProcessType {
    /// Получить код операции для query string
    pub fn code(&self) -> &'static str {
        match self {
            ProcessType::GetAll => "GetAll",
            ProcessType::GetOne => "GetOne",
            ProcessType::AddOne => "AddOne",
            ProcessType::UpdateOne => "UpdateOne",
            ProcessType::DeleteLogic => "DeleteLogic",
            ProcessType::DeleteHard => "DeleteHard",
            ProcessType::ActivateOne => "ActivateOne",
            ProcessType::DeactivateOne => "DeactivateOne",
            ProcessType::DeactivateMany => "DeactivateMany",
            ProcessType::SetPrincipal => "SetPrincipal",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessType::GetAll => "Чтение списка",
            ProcessType::GetOne => "Чтение записи",
            ProcessType::AddOne => "Создание",
            ProcessType::UpdateOne => "Обновление",
            ProcessType::DeleteLogic => "Мягкое удаление",
            ProcessType::DeleteHard => "Физическое удаление",
            ProcessType::ActivateOne => "Активация",
            ProcessType::DeactivateOne => "Деактивация",
            ProcessType::DeactivateMany => "Массовая деактивация",
            ProcessType::SetPrincipal => "Назначение основного файла",
        }
    }

    /// Операция изменяет данные (требует JSON body или меняет состояние)
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ProcessType::GetAll | ProcessType::GetOne)
    }

    /// Получить все типы операций
    pub fn all() -> Vec<ProcessType> {
        vec![
            ProcessType::GetAll,
            ProcessType::GetOne,
            ProcessType::AddOne,
            ProcessType::UpdateOne,
            ProcessType::DeleteLogic,
            ProcessType::DeleteHard,
            ProcessType::ActivateOne,
            ProcessType::DeactivateOne,
            ProcessType::DeactivateMany,
            ProcessType::SetPrincipal,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GetAll" => Some(ProcessType::GetAll),
            "GetOne" => Some(ProcessType::GetOne),
            "AddOne" => Some(ProcessType::AddOne),
            "UpdateOne" => Some(ProcessType::UpdateOne),
            "DeleteLogic" => Some(ProcessType::DeleteLogic),
            "DeleteHard" => Some(ProcessType::DeleteHard),
            "ActivateOne" => Some(ProcessType::ActivateOne),
            "DeactivateOne" => Some(ProcessType::DeactivateOne),
            "DeactivateMany" => Some(ProcessType::DeactivateMany),
            "SetPrincipal" => Some(ProcessType::SetPrincipal),
            _ => None,
        }
    }
}

impl ToString for ProcessType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for pt in ProcessType::all() {
            assert_eq!(ProcessType::from_code(pt.code()), Some(pt));
        }
        assert_eq!(ProcessType::from_code("GetEverything"), None);
    }
}
