//! State

use std::{num::NonZeroU64, sync::Arc};

use catalog_app::context::AppContext;

#[derive(Clone, Debug)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) page_size: NonZeroU64,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, page_size: NonZeroU64) -> Self {
        Self { app, page_size }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, page_size: NonZeroU64) -> Arc<Self> {
        Arc::new(Self::new(app, page_size))
    }
}
