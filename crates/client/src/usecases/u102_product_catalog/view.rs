use crate::shared::list_utils::join_by_foreign_key;
use catalog_contracts::domain::a001_product::Product;
use catalog_contracts::domain::a002_presentation::Presentation;
use serde::{Deserialize, Serialize};

/// Товар со всеми его презентациями
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    pub product: Product,
    pub presentations: Vec<Presentation>,
}

impl ProductView {
    pub fn presentation_count(&self) -> usize {
        self.presentations.len()
    }
}

/// Склеить товары с презентациями по `SKUID`. Порядок товаров
/// сохраняется; товары без презентаций получают пустой список.
pub fn compose(products: Vec<Product>, presentations: Vec<Presentation>) -> Vec<ProductView> {
    join_by_foreign_key(
        products,
        presentations,
        |p| p.sku_id.value().to_string(),
        |s| s.sku_id.clone(),
    )
    .into_iter()
    .map(|(product, presentations)| ProductView {
        product,
        presentations,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_contracts::domain::a001_product::ProductDto;
    use catalog_contracts::domain::a002_presentation::PresentationDto;

    fn product(sku: &str) -> Product {
        Product::new_for_insert(
            &ProductDto {
                sku_id: sku.into(),
                des_sku: format!("Producto {}", sku),
                marca: None,
                codigo_barras: None,
                cat_ids: Vec::new(),
            },
            "admin",
        )
    }

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

    #[test]
    fn groups_presentations_under_their_product() {
        let products = vec![product("SKU-1"), product("SKU-2"), product("SKU-3")];
        let presentations = vec![
            presentation("PRES-1", "SKU-2"),
            presentation("PRES-2", "SKU-1"),
            presentation("PRES-3", "SKU-2"),
        ];

        let views = compose(products, presentations);

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].product.sku_id.value(), "SKU-1");
        assert_eq!(views[0].presentation_count(), 1);
        assert_eq!(views[1].presentation_count(), 2);
        assert_eq!(views[1].presentations[0].id_presenta.value(), "PRES-1");
        assert_eq!(views[1].presentations[1].id_presenta.value(), "PRES-3");
        assert!(views[2].presentations.is_empty());
    }
}
