pub mod aggregate;

pub use aggregate::{Product, ProductDto, ProductId, ProductPatch};
