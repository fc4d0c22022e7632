//! Клиентское ядро каталога: REST-клиент с контекстом сессии,
//! сервисы пяти ресурсов, распаковка конвертов ответов, склейка
//! связанных списков и ограниченно-параллельные пакетные операции.

pub mod domain;
pub mod shared;
pub mod usecases;

pub use shared::api::error::ApiError;
pub use shared::api::query::QueryParams;
pub use shared::api::rest_client::{RestClient, SessionContext};
pub use shared::bulk::{run_bulk, BulkOutcome, DEFAULT_CONCURRENCY};
pub use shared::config::{load_config, ClientConfig};
