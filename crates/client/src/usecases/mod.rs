pub mod u101_presentation_catalog;
pub mod u102_product_catalog;
pub mod u103_bulk_delete;
