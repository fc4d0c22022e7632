//! Common types for all aggregates

pub mod audit_info;
pub mod record_flags;

// Re-exports
pub use audit_info::AuditInfo;
pub use record_flags::RecordFlags;
