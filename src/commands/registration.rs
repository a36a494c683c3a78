//! `register` command: drives the two registration screens end to end.

use anyhow::Context;
use od_app::{App, PickOutcome};
use od_core::geo::Coordinate;
use tracing::{info, info_span, warn, Instrument};

use super::dto::RegistrationDto;
use super::orphanages::map_dto;
use crate::adapters::ConsoleAlert;

/// Everything typed into the registration screens.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    /// Number of "+" taps on the photos row.
    pub image_picks: usize,
}

/// Map → "+" → tap the map → "Next" → fill in the form → pick photos →
/// "Register".
///
/// Cancelled picks are skipped. A refused photo permission is alerted and
/// the orphanage is registered without the remaining photos. A map that
/// fails to load is alerted and does not stop the registration.
pub async fn register_orphanage(
    app: &mut App,
    alert: &ConsoleAlert,
    request: RegisterRequest,
) -> anyhow::Result<RegistrationDto> {
    let span = info_span!(
        "command.registration.register",
        name = %request.name,
        image_picks = request.image_picks
    );
    async {
        let position = Coordinate::new(request.latitude, request.longitude)
            .context("Invalid position")?;

        if let Err(err) = app.start().await {
            warn!(error = %err, "map did not load, registering anyway");
        }
        app.start_registration().await?;
        app.select_position(position)?;
        app.confirm_position().await?;

        {
            let form = app.registration_form_mut()?;
            form.name = request.name.clone();
            form.about = request.about.clone();
            form.instructions = request.instructions.clone();
            form.opening_hours = request.opening_hours.clone();
            form.open_on_weekends = request.open_on_weekends;
        }

        let mut attached = 0;
        let mut skipped = 0;
        for _ in 0..request.image_picks {
            match app.add_image().await.context("Could not pick an image")? {
                PickOutcome::Added(image) => {
                    info!(uri = image.uri(), "image attached");
                    attached += 1;
                }
                PickOutcome::Cancelled => {
                    warn!("image pick cancelled, skipping");
                    skipped += 1;
                }
                PickOutcome::PermissionDenied => {
                    let remaining = request.image_picks - attached - skipped;
                    warn!(remaining, "photo access denied, skipping remaining images");
                    skipped += remaining;
                    break;
                }
            }
        }

        app.submit_registration()
            .await
            .context("Could not register the orphanage")?;

        Ok(RegistrationDto {
            name: request.name,
            latitude: position.latitude(),
            longitude: position.longitude(),
            images_attached: attached,
            images_skipped: skipped,
            screen: app.current_route().screen().to_string(),
            map: map_dto(app),
            alerts: alert.drain(),
        })
    }
    .instrument(span)
    .await
}
