use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_contracts::domain::a001_product::ProductId;
use catalog_contracts::domain::a002_presentation::PresentationId;

use crate::domain::a001_product::ProductService;
use crate::domain::a002_presentation::PresentationService;
use crate::shared::api::rest_client::RestClient;
use crate::shared::bulk::{run_bulk, BulkOutcome, DEFAULT_CONCURRENCY};

/// Режим удаления: логическое (флаг `DELETED`) или физическое
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteMode {
    Logic,
    Hard,
}

/// Итог пакетного удаления
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteReport {
    pub batch_id: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<BulkOutcome>,
}

/// Исполнитель пакетного удаления товаров и презентаций.
/// Каждый идентификатор обрабатывается отдельным запросом,
/// ошибки по одному элементу не прерывают пакет.
pub struct BulkDeleteExecutor {
    products: ProductService,
    presentations: PresentationService,
    concurrency: usize,
}

impl BulkDeleteExecutor {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            products: ProductService::new(Arc::clone(&client)),
            presentations: PresentationService::new(client),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Удалить пакет товаров по `SKUID`
    pub async fn delete_products(&self, ids: Vec<String>, mode: DeleteMode) -> BulkDeleteReport {
        let service = self.products.clone();
        let outcomes = run_bulk(ids, self.concurrency, move |id| {
            let service = service.clone();
            async move {
                let id = ProductId::new(id);
                match mode {
                    DeleteMode::Logic => service.delete_logic(&id).await,
                    DeleteMode::Hard => service.delete_hard(&id).await,
                }
            }
        })
        .await;

        build_report("products", mode, outcomes)
    }

    /// Удалить пакет презентаций по `IdPresentaOK`
    pub async fn delete_presentations(
        &self,
        ids: Vec<String>,
        mode: DeleteMode,
    ) -> BulkDeleteReport {
        let service = self.presentations.clone();
        let outcomes = run_bulk(ids, self.concurrency, move |id| {
            let service = service.clone();
            async move {
                let id = PresentationId::new(id);
                match mode {
                    DeleteMode::Logic => service.delete_logic(&id).await,
                    DeleteMode::Hard => service.delete_hard(&id).await,
                }
            }
        })
        .await;

        build_report("presentations", mode, outcomes)
    }
}

fn build_report(resource: &str, mode: DeleteMode, outcomes: Vec<BulkOutcome>) -> BulkDeleteReport {
    let batch_id = Uuid::new_v4().to_string();
    let total = outcomes.len();
    let succeeded = outcomes.iter().filter(|o| o.ok).count();
    let failed = total - succeeded;

    tracing::info!(
        batch_id = %batch_id,
        resource,
        ?mode,
        total,
        succeeded,
        failed,
        "Bulk delete finished"
    );

    BulkDeleteReport {
        batch_id,
        total,
        succeeded,
        failed,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: &str, ok: bool) -> BulkOutcome {
        BulkOutcome {
            id: id.to_string(),
            ok,
            error: if ok {
                None
            } else {
                Some("No encontrado".to_string())
            },
        }
    }

    #[test]
    fn report_counts_successes_and_failures() {
        let report = build_report(
            "products",
            DeleteMode::Logic,
            vec![outcome("A", true), outcome("B", false), outcome("C", true)],
        );

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.outcomes.len(), 3);
        assert!(!report.batch_id.is_empty());
    }

    #[test]
    fn empty_batch_yields_empty_report() {
        let report = build_report("presentations", DeleteMode::Hard, Vec::new());

        assert_eq!(report.total, 0);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed, 0);
        assert!(report.outcomes.is_empty());
    }
}
