use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use od_core::ids::OrphanageId;
use od_core::orphanage::OrphanageDetail;
use od_core::ports::{ApiError, OrphanageApiPort};

/// Load one orphanage with its images.
pub struct GetOrphanageDetails {
    api: Arc<dyn OrphanageApiPort>,
}

impl GetOrphanageDetails {
    pub fn new(api: Arc<dyn OrphanageApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, id: OrphanageId) -> Result<OrphanageDetail, ApiError> {
        let span = info_span!("usecase.get_orphanage_details.execute", orphanage_id = %id);
        async {
            let detail = self.api.get_orphanage(id).await?;
            debug!(images = detail.images.len(), "orphanage detail fetched");
            Ok(detail)
        }
        .instrument(span)
        .await
    }
}
