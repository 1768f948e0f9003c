use crate::domain::errors::ResultsError;
use crate::domain::ports::ResultStore;

// Response returned by the clear use case.
pub struct ClearHistoryResponse {
    pub deleted_count: u64,
}

// Bulk clear use case; confirmation is the caller's concern.
pub struct ClearHistoryUseCase<S> {
    pub store: S,
}

impl<S> ClearHistoryUseCase<S>
where
    S: ResultStore,
{
    pub async fn execute(&self) -> Result<ClearHistoryResponse, ResultsError> {
        let deleted_count = self
            .store
            .clear()
            .await
            .map_err(ResultsError::StorageFailure)?;

        Ok(ClearHistoryResponse { deleted_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::list_history::ListHistoryUseCase;
    use crate::use_cases::test_support::{FailureFlags, RecordingStore, sample_record};

    #[tokio::test]
    async fn when_records_exist_then_all_are_removed_and_counted() {
        let store = RecordingStore::new();
        store.insert_test_record(sample_record("a", 1_700_000_000, false));
        store.insert_test_record(sample_record("b", 1_700_000_010, true));
        store.insert_test_record(sample_record("c", 1_700_000_020, false));

        let result = ClearHistoryUseCase {
            store: store.clone(),
        }
        .execute()
        .await
        .expect("expected clear to succeed");

        assert_eq!(result.deleted_count, 3);

        let history = ListHistoryUseCase { store }
            .execute()
            .await
            .expect("expected listing to succeed");
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn when_store_is_empty_then_deleted_count_is_zero() {
        let result = ClearHistoryUseCase {
            store: RecordingStore::new(),
        }
        .execute()
        .await
        .expect("expected clear to succeed");

        assert_eq!(result.deleted_count, 0);
    }

    #[tokio::test]
    async fn when_store_clear_fails_then_returns_storage_failure_and_keeps_records() {
        let store = RecordingStore::new().with_failures(FailureFlags {
            clear: true,
            ..Default::default()
        });
        store.insert_test_record(sample_record("a", 1_700_000_000, false));

        let result = ClearHistoryUseCase {
            store: store.clone(),
        }
        .execute()
        .await;

        assert!(matches!(result, Err(ResultsError::StorageFailure(_))));
        assert_eq!(store.stored_records().len(), 1);
    }
}
