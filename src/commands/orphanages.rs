//! Listing and details commands.

use anyhow::Context;
use od_app::{App, DetailsState};
use od_core::ids::OrphanageId;
use tracing::{info_span, Instrument};

use super::dto::{DetailsDto, MapDto};

pub(crate) fn map_dto(app: &App) -> MapDto {
    MapDto {
        orphanages: app.map().orphanages.clone(),
        footer: app.map().footer(),
    }
}

/// Open the map and report what it shows.
pub async fn list_orphanages(app: &mut App) -> anyhow::Result<MapDto> {
    let span = info_span!("command.orphanages.list");
    async {
        app.start().await.context("Could not load orphanages")?;
        Ok(map_dto(app))
    }
    .instrument(span)
    .await
}

/// Open the map, tap the marker of `id` and report the details screen.
pub async fn show_orphanage(app: &mut App, id: OrphanageId) -> anyhow::Result<DetailsDto> {
    let span = info_span!("command.orphanages.show", orphanage_id = %id);
    async {
        app.open_orphanage(id).await?;
        match app.details() {
            Some(DetailsState::Loaded { detail }) => Ok(DetailsDto::from(detail.clone())),
            Some(DetailsState::Failed { message, .. }) => {
                anyhow::bail!("Could not load orphanage {id}: {message}")
            }
            Some(DetailsState::Loading { .. }) | None => {
                anyhow::bail!("Orphanage {id} did not finish loading")
            }
        }
    }
    .instrument(span)
    .await
}
