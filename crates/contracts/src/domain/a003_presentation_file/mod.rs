pub mod aggregate;

pub use aggregate::{
    FileId, FilePayloadKind, PresentationFile, PresentationFileDto, PresentationFilePatch,
};
