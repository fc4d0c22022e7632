pub mod common;

pub mod a001_product;
pub mod a002_presentation;
pub mod a003_presentation_file;
pub mod a004_category;
pub mod a005_price_list;
