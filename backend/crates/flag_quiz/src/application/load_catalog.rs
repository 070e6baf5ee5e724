//! Load Catalog Use Case

use crate::domain::entities::FlagCatalog;
use crate::domain::repository::CatalogSource;
use crate::error::{QuizError, QuizResult};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Load Catalog Use Case
///
/// Reads the catalog from its source on first use and hands out the same
/// `Arc` afterwards. A failed load is returned unchanged and leaves the
/// cache empty.
pub struct LoadCatalogUseCase<S>
where
    S: CatalogSource,
{
    source: Arc<S>,
    cache: OnceCell<Arc<FlagCatalog>>,
}

impl<S> LoadCatalogUseCase<S>
where
    S: CatalogSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    pub async fn load(&self) -> QuizResult<Arc<FlagCatalog>> {
        let catalog = self
            .cache
            .get_or_try_init(|| async {
                let codes = self.source.load().await?;
                let catalog = FlagCatalog::new(codes);
                tracing::info!(catalog_size = catalog.len(), "Loaded flag catalog");
                Ok::<_, QuizError>(Arc::new(catalog))
            })
            .await?;
        Ok(Arc::clone(catalog))
    }

    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail_first: bool,
    }

    impl CountingSource {
        fn new(fail_first: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first,
            }
        }
    }

    impl CatalogSource for CountingSource {
        async fn load(&self) -> QuizResult<BTreeMap<String, String>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(QuizError::DataUnavailable("missing".into()));
            }
            Ok(BTreeMap::from([
                ("fr".to_string(), "France".to_string()),
                ("de".to_string(), "Germany".to_string()),
            ]))
        }
    }

    #[tokio::test]
    async fn test_source_read_once() {
        let source = Arc::new(CountingSource::new(false));
        let use_case = LoadCatalogUseCase::new(source.clone());
        assert!(!use_case.is_loaded());

        let first = use_case.load().await.unwrap();
        let second = use_case.load().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(use_case.is_loaded());
    }

    #[tokio::test]
    async fn test_failure_propagates_and_is_not_cached() {
        let source = Arc::new(CountingSource::new(true));
        let use_case = LoadCatalogUseCase::new(source.clone());

        let err = use_case.load().await.unwrap_err();
        assert!(matches!(err, QuizError::DataUnavailable(_)));
        assert!(!use_case.is_loaded());

        let catalog = use_case.load().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
