use crate::shared::list_utils::join_by_foreign_key;
use catalog_contracts::domain::a002_presentation::Presentation;
use catalog_contracts::domain::a003_presentation_file::PresentationFile;
use catalog_contracts::domain::a005_price_list::PriceList;
use serde::{Deserialize, Serialize};

/// Презентация со своими файлами и ценами из листов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationView {
    pub presentation: Presentation,
    pub files: Vec<PresentationFile>,
    pub prices: Vec<PresentationPrice>,
}

impl PresentationView {
    /// Основной файл презентации, если назначен
    pub fn principal_file(&self) -> Option<&PresentationFile> {
        self.files.iter().find(|f| f.principal)
    }
}

/// Цена презентации в конкретном листе цен
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationPrice {
    pub id_lista: String,
    pub des_lista: String,
    pub precio: f64,
}

/// Склеить презентации с файлами (по `IdPresentaOK`) и позициями
/// листов цен. Порядок презентаций сохраняется; презентации без
/// файлов или цен получают пустые списки.
pub fn compose(
    presentations: Vec<Presentation>,
    files: Vec<PresentationFile>,
    price_lists: Vec<PriceList>,
) -> Vec<PresentationView> {
    let prices: Vec<(String, PresentationPrice)> = price_lists
        .iter()
        .flat_map(|list| {
            list.precios.iter().map(move |entry| {
                (
                    entry.id_presenta.clone(),
                    PresentationPrice {
                        id_lista: list.id_lista.value().to_string(),
                        des_lista: list.des_lista.clone(),
                        precio: entry.precio,
                    },
                )
            })
        })
        .collect();

    let with_files = join_by_foreign_key(
        presentations,
        files,
        |p| p.id_presenta.value().to_string(),
        |f| f.id_presenta.clone(),
    );

    join_by_foreign_key(
        with_files,
        prices,
        |(p, _)| p.id_presenta.value().to_string(),
        |(id_presenta, _)| id_presenta.clone(),
    )
    .into_iter()
    .map(|((presentation, files), prices)| PresentationView {
        presentation,
        files,
        prices: prices.into_iter().map(|(_, price)| price).collect(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_contracts::domain::a002_presentation::PresentationDto;
    use catalog_contracts::domain::a003_presentation_file::PresentationFileDto;
    use catalog_contracts::domain::a005_price_list::{PriceEntry, PriceListDto};

    fn presentation(id: &str, sku: &str) -> Presentation {
        Presentation::new_for_insert(
            &PresentationDto {
                id_presenta: id.into(),
                sku_id: sku.into(),
                des_presenta: format!("Presentación {}", id),
                propiedades: None,
            },
            "admin",
        )
    }

    fn file(id: &str, id_presenta: &str, principal: bool) -> PresentationFile {
        PresentationFile::new_for_insert(
            &PresentationFileDto {
                id_archivo: id.into(),
                id_presenta: id_presenta.into(),
                file_type: "image".into(),
                archivo: format!("https://cdn.example.com/{}.jpg", id),
                principal,
            },
            "admin",
        )
    }

    fn price_list(id: &str, entries: Vec<(&str, f64)>) -> PriceList {
        PriceList::new_for_insert(
            &PriceListDto {
                id_lista: id.into(),
                des_lista: format!("Lista {}", id),
                precios: entries
                    .into_iter()
                    .map(|(id_presenta, precio)| PriceEntry {
                        id_presenta: id_presenta.into(),
                        precio,
                    })
                    .collect(),
            },
            "admin",
        )
    }

    #[test]
    fn composes_files_and_prices_per_presentation() {
        let presentations = vec![presentation("PRES-1", "SKU-1"), presentation("PRES-2", "SKU-1")];
        let files = vec![
            file("FILE-1", "PRES-2", false),
            file("FILE-2", "PRES-1", true),
            file("FILE-3", "PRES-2", false),
        ];
        let price_lists = vec![
            price_list("LST-1", vec![("PRES-1", 100.0), ("PRES-2", 90.0)]),
            price_list("LST-2", vec![("PRES-1", 80.0)]),
        ];

        let views = compose(presentations, files, price_lists);

        assert_eq!(views.len(), 2);

        assert_eq!(views[0].presentation.id_presenta.value(), "PRES-1");
        assert_eq!(views[0].files.len(), 1);
        assert_eq!(views[0].principal_file().unwrap().id_archivo.value(), "FILE-2");
        assert_eq!(
            views[0].prices,
            vec![
                PresentationPrice {
                    id_lista: "LST-1".into(),
                    des_lista: "Lista LST-1".into(),
                    precio: 100.0
                },
                PresentationPrice {
                    id_lista: "LST-2".into(),
                    des_lista: "Lista LST-2".into(),
                    precio: 80.0
                },
            ]
        );

        assert_eq!(views[1].presentation.id_presenta.value(), "PRES-2");
        assert_eq!(views[1].files.len(), 2);
        assert_eq!(views[1].files[0].id_archivo.value(), "FILE-1");
        assert_eq!(views[1].files[1].id_archivo.value(), "FILE-3");
        assert!(views[1].principal_file().is_none());
        assert_eq!(views[1].prices.len(), 1);
    }

    #[test]
    fn presentations_without_matches_get_empty_lists() {
        let views = compose(vec![presentation("PRES-9", "SKU-9")], Vec::new(), Vec::new());
        assert_eq!(views.len(), 1);
        assert!(views[0].files.is_empty());
        assert!(views[0].prices.is_empty());
    }
}
