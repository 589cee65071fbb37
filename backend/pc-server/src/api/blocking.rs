use crate::ApiResult;

use pc_store::StoreError;

/// Run a synchronous store call on the blocking thread pool
pub async fn run_store<T, F>(op: F) -> ApiResult<T>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(op).await?;
    Ok(result?)
}
