use serde::{Deserialize, Serialize};

/// Типы файлов-вложений презентации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    Image,
    Pdf,
    Doc,
    Video,
    Other,
}

impl FileType {
    /// Получить код типа для wire-поля `FileType`
    pub fn code(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Pdf => "pdf",
            FileType::Doc => "doc",
            FileType::Video => "video",
            FileType::Other => "other",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            FileType::Image => "Изображение",
            FileType::Pdf => "PDF",
            FileType::Doc => "Документ",
            FileType::Video => "Видео",
            FileType::Other => "Прочее",
        }
    }

    /// Получить все типы файлов
    pub fn all() -> Vec<FileType> {
        vec![
            FileType::Image,
            FileType::Pdf,
            FileType::Doc,
            FileType::Video,
            FileType::Other,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "image" => Some(FileType::Image),
            "pdf" => Some(FileType::Pdf),
            "doc" => Some(FileType::Doc),
            "video" => Some(FileType::Video),
            "other" => Some(FileType::Other),
            _ => None,
        }
    }
}

impl ToString for FileType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for ft in FileType::all() {
            assert_eq!(FileType::from_code(ft.code()), Some(ft));
        }
        assert_eq!(FileType::from_code("webp-panorama"), None);
    }
}
