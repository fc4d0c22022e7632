pub mod aggregate;

pub use aggregate::{Presentation, PresentationDto, PresentationId, PresentationPatch};
