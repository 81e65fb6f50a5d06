use std::sync::Arc;
use tracing::info;

use crate::args::CleanArgs;
use crate::controller::cache::{CachedLoader, PersistedCache};
use crate::model::LayoutItem;
use crate::storage::{DataSource, FileSource, HttpSource};

/// Shared by every worker: the cached data loader and the officers layout.
#[derive(Clone)]
pub struct SiteState {
    pub loader: CachedLoader,
    pub officers_layout: Option<Vec<LayoutItem>>,
}

impl SiteState {
    #[must_use]
    pub fn new(loader: CachedLoader, officers_layout: Option<Vec<LayoutItem>>) -> Self {
        Self {
            loader,
            officers_layout,
        }
    }

    /// Wires the data source and cache tiers the arguments ask for.
    #[must_use]
    pub fn from_args(args: &CleanArgs) -> Self {
        let source: Arc<dyn DataSource> = match &args.data_url {
            Some(url) => Arc::new(HttpSource::new(url)),
            None => Arc::new(FileSource::new(args.data_dir.clone())),
        };
        let mut loader = CachedLoader::new(source).with_cache_enabled(args.cache_enabled);
        if let Some(dir) = &args.cache_dir {
            loader = loader.with_persisted(PersistedCache::new(dir.clone()));
        }
        info!(
            source = %loader.source_description(),
            cache = args.cache_enabled,
            persisted = ?args.cache_dir,
            "data loader ready"
        );
        Self::new(loader, args.officers_layout.clone())
    }
}
