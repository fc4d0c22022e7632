pub mod aggregate;

pub use aggregate::{PriceEntry, PriceList, PriceListDto, PriceListId, PriceListPatch};
