//! Screen orchestration.
//!
//! [`App`] owns the navigator and the state of every mounted screen, and
//! runs the focus/unmount side effects the screens need:
//!
//! - the map re-fetches the collection every time it gains focus;
//! - the details screen loads its record when opened;
//! - leaving the registration screens cancels a pending submission.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use od_core::geo::{Coordinate, MapRegion};
use od_core::ids::OrphanageId;
use od_core::navigation::{Navigator, Route, Screen, Transition};
use od_core::orphanage::{footer_label, OrphanageDetail, OrphanageSummary};
use od_core::ports::{AlertPort, ApiError};
use od_core::registration::RegistrationForm;

use crate::deps::AppDeps;
use crate::usecases::registration::{
    AddImage, FlowError, PickOutcome, RegistrationFlow, SubmitRegistration,
};
use crate::usecases::{GetOrphanageDetails, ListOrphanages};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no registration in progress")]
    NoRegistration,
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// State of the listing screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapState {
    pub region: MapRegion,
    pub orphanages: Vec<OrphanageSummary>,
}

impl MapState {
    pub fn footer(&self) -> String {
        footer_label(self.orphanages.len())
    }
}

/// State of the details screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state")]
pub enum DetailsState {
    Loading { id: OrphanageId },
    Loaded { detail: OrphanageDetail },
    Failed { id: OrphanageId, message: String },
}

pub struct App {
    navigator: Navigator,
    map: MapState,
    details: Option<DetailsState>,
    registration: Option<RegistrationFlow>,
    list_orphanages: ListOrphanages,
    get_details: GetOrphanageDetails,
    add_image: Arc<AddImage>,
    submit: Arc<SubmitRegistration>,
    alert: Arc<dyn AlertPort>,
}

impl App {
    pub fn new(deps: AppDeps, region: MapRegion) -> Self {
        Self {
            navigator: Navigator::new(),
            map: MapState {
                region,
                orphanages: Vec::new(),
            },
            details: None,
            registration: None,
            list_orphanages: ListOrphanages::new(deps.api.clone()),
            get_details: GetOrphanageDetails::new(deps.api.clone()),
            add_image: Arc::new(AddImage::new(deps.image_picker, deps.alert.clone())),
            submit: Arc::new(SubmitRegistration::new(deps.api)),
            alert: deps.alert,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }

    pub fn details(&self) -> Option<&DetailsState> {
        self.details.as_ref()
    }

    pub fn registration(&self) -> Option<&RegistrationFlow> {
        self.registration.as_ref()
    }

    /// First focus of the map.
    pub async fn start(&mut self) -> Result<(), AppError> {
        self.refresh_map().await
    }

    /// Forward navigation with parameters.
    pub async fn navigate(&mut self, route: Route) -> Result<(), AppError> {
        if route.screen() == Screen::OrphanageData && self.registration.is_none() {
            return Err(AppError::NoRegistration);
        }
        let transition = self.navigator.navigate(route);
        self.apply(transition).await
    }

    /// Header back button. Returns `false` on the root screen.
    pub async fn go_back(&mut self) -> Result<bool, AppError> {
        match self.navigator.go_back() {
            Some(transition) => {
                self.apply(transition).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Header close button.
    pub async fn close(&mut self) -> Result<(), AppError> {
        self.navigate(Route::OrphanagesMap).await
    }

    /// Marker callout tap.
    pub async fn open_orphanage(&mut self, id: OrphanageId) -> Result<(), AppError> {
        self.navigate(Route::OrphanageDetails { id }).await
    }

    /// "+" button of the map footer.
    pub async fn start_registration(&mut self) -> Result<(), AppError> {
        self.navigate(Route::SelectMapPosition).await
    }

    pub fn select_position(&mut self, position: Coordinate) -> Result<(), AppError> {
        self.registration_mut()?.select_position(position);
        Ok(())
    }

    pub async fn confirm_position(&mut self) -> Result<(), AppError> {
        let route = self.registration_ref()?.confirm_position()?;
        self.navigate(route).await
    }

    pub fn registration_form_mut(&mut self) -> Result<&mut RegistrationForm, AppError> {
        Ok(self.registration_mut()?.form_mut()?)
    }

    pub async fn add_image(&mut self) -> Result<PickOutcome, AppError> {
        Ok(self.registration_mut()?.add_image().await?)
    }

    /// "Register" button: on success the app is back on the map, which has
    /// re-fetched the collection.
    pub async fn submit_registration(&mut self) -> Result<(), AppError> {
        let route = self.registration_ref()?.submit().await?;
        self.navigate(route).await
    }

    /// Re-fetches the listing. Failures are alerted and keep the previous
    /// list.
    pub async fn refresh_map(&mut self) -> Result<(), AppError> {
        match self.list_orphanages.execute().await {
            Ok(orphanages) => {
                info!(count = orphanages.len(), "map refreshed");
                self.map.orphanages = orphanages;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to refresh map");
                self.alert
                    .alert(&format!("Could not load orphanages ({err})."))
                    .await;
                Err(err.into())
            }
        }
    }

    fn registration_ref(&self) -> Result<&RegistrationFlow, AppError> {
        self.registration.as_ref().ok_or(AppError::NoRegistration)
    }

    fn registration_mut(&mut self) -> Result<&mut RegistrationFlow, AppError> {
        self.registration.as_mut().ok_or(AppError::NoRegistration)
    }

    async fn apply(&mut self, transition: Transition) -> Result<(), AppError> {
        if transition.unmounted(Screen::SelectMapPosition) {
            if let Some(flow) = self.registration.take() {
                flow.cancel();
                info!("registration abandoned");
            }
        } else if transition.unmounted(Screen::OrphanageData) {
            if let Some(flow) = self.registration.as_mut() {
                flow.close_data_screen();
            }
        }
        if transition.unmounted(Screen::OrphanageDetails) {
            self.details = None;
        }

        match &transition.to {
            Route::OrphanagesMap => {
                // Focus refreshes are best effort; the user has been alerted.
                let _ = self.refresh_map().await;
            }
            Route::OrphanageDetails { id } => self.load_details(*id).await,
            Route::SelectMapPosition => {
                if self.registration.is_none() {
                    self.registration = Some(RegistrationFlow::new(
                        self.map.region,
                        self.add_image.clone(),
                        self.submit.clone(),
                        self.alert.clone(),
                    ));
                }
            }
            Route::OrphanageData { .. } => {
                self.registration_mut()?.open_data_screen(&transition.to)?;
            }
        }
        Ok(())
    }

    async fn load_details(&mut self, id: OrphanageId) {
        self.details = Some(DetailsState::Loading { id });
        self.details = Some(match self.get_details.execute(id).await {
            Ok(detail) => DetailsState::Loaded { detail },
            Err(err) => {
                warn!(orphanage_id = %id, error = %err, "failed to load orphanage");
                self.alert
                    .alert(&format!("Could not load this orphanage ({err})."))
                    .await;
                DetailsState::Failed {
                    id,
                    message: err.to_string(),
                }
            }
        });
    }
}
