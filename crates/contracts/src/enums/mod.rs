pub mod file_type;
pub mod process_type;

pub use file_type::FileType;
pub use process_type::ProcessType;
