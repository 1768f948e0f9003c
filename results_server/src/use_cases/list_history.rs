use crate::domain::entities::ResultRecord;
use crate::domain::errors::ResultsError;
use crate::domain::ports::ResultStore;

// History listing use case with injected dependencies.
pub struct ListHistoryUseCase<S> {
    pub store: S,
}

impl<S> ListHistoryUseCase<S>
where
    S: ResultStore,
{
    pub async fn execute(&self) -> Result<Vec<ResultRecord>, ResultsError> {
        self.store
            .list_newest_first()
            .await
            .map_err(ResultsError::StorageFailure)
    }
}
