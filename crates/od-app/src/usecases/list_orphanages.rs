use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use od_core::orphanage::OrphanageSummary;
use od_core::ports::{ApiError, OrphanageApiPort};

/// Fetch the full orphanage collection for the map.
pub struct ListOrphanages {
    api: Arc<dyn OrphanageApiPort>,
}

impl ListOrphanages {
    pub fn new(api: Arc<dyn OrphanageApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> Result<Vec<OrphanageSummary>, ApiError> {
        let span = info_span!("usecase.list_orphanages.execute");
        async {
            let orphanages = self.api.list_orphanages().await?;
            debug!(count = orphanages.len(), "orphanages fetched");
            Ok(orphanages)
        }
        .instrument(span)
        .await
    }
}
