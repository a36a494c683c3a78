//! Registration flow orchestrator.
//!
//! Holds the state of one registration attempt across the two screens and
//! delegates the side effects to [`AddImage`] and [`SubmitRegistration`].

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use od_core::geo::{Coordinate, MapRegion};
use od_core::navigation::Route;
use od_core::ports::AlertPort;
use od_core::registration::RegistrationForm;

use super::{AddImage, FlowError, PickOutcome, PositionSelector, SubmitError, SubmitRegistration};

pub struct RegistrationFlow {
    selector: PositionSelector,
    form: Option<RegistrationForm>,
    add_image: Arc<AddImage>,
    submit: Arc<SubmitRegistration>,
    alert: Arc<dyn AlertPort>,
    /// Cancels the pending submission of the open data screen.
    cancel: CancellationToken,
}

impl RegistrationFlow {
    pub fn new(
        region: MapRegion,
        add_image: Arc<AddImage>,
        submit: Arc<SubmitRegistration>,
        alert: Arc<dyn AlertPort>,
    ) -> Self {
        Self {
            selector: PositionSelector::new(region),
            form: None,
            add_image,
            submit,
            alert,
            cancel: CancellationToken::new(),
        }
    }

    pub fn selector(&self) -> &PositionSelector {
        &self.selector
    }

    pub fn select_position(&mut self, position: Coordinate) {
        self.selector.select(position);
    }

    /// Confirms the marker and returns the route of the data screen.
    pub fn confirm_position(&self) -> Result<Route, FlowError> {
        let position = self.selector.confirm()?;
        info!(%position, "position confirmed");
        Ok(Route::OrphanageData { position })
    }

    /// Mounts the data screen for the route it was opened with.
    ///
    /// Re-opening with the same position keeps the form as it is.
    pub fn open_data_screen(&mut self, route: &Route) -> Result<(), FlowError> {
        let form = RegistrationForm::from_route(route)?;
        if let Some(current) = &self.form {
            if current.position() == form.position() {
                return Ok(());
            }
            self.close_data_screen();
        }
        debug!(draft_id = %form.draft_id(), "data screen opened");
        self.form = Some(form);
        Ok(())
    }

    /// Unmounts the data screen: cancels its pending submission and drops
    /// the form along with its submission record. The selected position is
    /// kept.
    pub fn close_data_screen(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        if let Some(form) = self.form.take() {
            self.submit.forget(form.draft_id());
            debug!(draft_id = %form.draft_id(), "data screen closed");
        }
    }

    /// Ends the attempt; a pending submission is cancelled.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_data_screen_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Result<&RegistrationForm, FlowError> {
        self.form.as_ref().ok_or(FlowError::DataScreenClosed)
    }

    pub fn form_mut(&mut self) -> Result<&mut RegistrationForm, FlowError> {
        self.form.as_mut().ok_or(FlowError::DataScreenClosed)
    }

    pub async fn add_image(&mut self) -> Result<PickOutcome, FlowError> {
        let form = self.form.as_mut().ok_or(FlowError::DataScreenClosed)?;
        Ok(self.add_image.execute(form).await?)
    }

    /// Submits the current form and returns the route to go to on success.
    ///
    /// API failures are shown to the user; the form stays as it was so the
    /// same data can be sent again.
    pub async fn submit(&self) -> Result<Route, FlowError> {
        let draft = self.form()?.snapshot();
        match self.submit.execute(&draft, &self.cancel).await {
            Ok(()) => Ok(Route::OrphanagesMap),
            Err(SubmitError::Api(err)) => {
                self.alert
                    .alert(&format!(
                        "Could not register the orphanage ({err}). Please try again."
                    ))
                    .await;
                Err(SubmitError::Api(err).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.form
            .as_ref()
            .is_some_and(|form| self.submit.is_in_flight(form.draft_id()))
    }
}

impl Drop for RegistrationFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(form) = &self.form {
            self.submit.forget(form.draft_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use od_core::ids::{DraftId, OrphanageId};
    use od_core::orphanage::{OrphanageDetail, OrphanageSummary};
    use od_core::ports::{
        ApiError, ImagePickerPort, OrphanageApiPort, PermissionStatus, PickerError,
        PickerOptions, PickerResult,
    };
    use od_core::registration::RegistrationPayload;

    mockall::mock! {
        Api {}

        #[async_trait]
        impl OrphanageApiPort for Api {
            async fn list_orphanages(&self) -> Result<Vec<OrphanageSummary>, ApiError>;
            async fn get_orphanage(&self, id: OrphanageId) -> Result<OrphanageDetail, ApiError>;
            async fn create_orphanage(&self, payload: &RegistrationPayload) -> Result<(), ApiError>;
        }
    }

    mockall::mock! {
        Picker {}

        #[async_trait]
        impl ImagePickerPort for Picker {
            async fn request_media_library_permission(&self) -> Result<PermissionStatus, PickerError>;
            async fn launch_image_library(&self, options: PickerOptions)
                -> Result<PickerResult, PickerError>;
        }
    }

    struct SilentAlert;

    #[async_trait]
    impl AlertPort for SilentAlert {
        async fn alert(&self, _message: &str) {}
    }

    fn flow(submit: Arc<SubmitRegistration>) -> RegistrationFlow {
        let alert: Arc<dyn AlertPort> = Arc::new(SilentAlert);
        let add_image = Arc::new(AddImage::new(Arc::new(MockPicker::new()), alert.clone()));
        RegistrationFlow::new(MapRegion::default(), add_image, submit, alert)
    }

    fn submitted_draft(flow: &mut RegistrationFlow) -> DraftId {
        let position = Coordinate::new(-6.52, -38.42).unwrap();
        flow.open_data_screen(&Route::OrphanageData { position })
            .unwrap();
        flow.form().unwrap().draft_id().clone()
    }

    fn accepting_api() -> Arc<MockApi> {
        let mut api = MockApi::new();
        api.expect_create_orphanage().times(1).returning(|_| Ok(()));
        Arc::new(api)
    }

    #[tokio::test]
    async fn closing_the_data_screen_forgets_the_registered_draft() {
        let submit = Arc::new(SubmitRegistration::new(accepting_api()));
        let mut flow = flow(submit.clone());
        let draft_id = submitted_draft(&mut flow);

        assert_eq!(flow.submit().await.unwrap(), Route::OrphanagesMap);
        assert!(matches!(
            flow.submit().await,
            Err(FlowError::Submit(SubmitError::AlreadySubmitted))
        ));
        assert!(submit.is_completed(&draft_id));

        flow.close_data_screen();
        assert!(!submit.is_completed(&draft_id));
    }

    #[tokio::test]
    async fn dropping_the_flow_forgets_the_registered_draft() {
        let submit = Arc::new(SubmitRegistration::new(accepting_api()));
        let mut flow = flow(submit.clone());
        let draft_id = submitted_draft(&mut flow);

        flow.submit().await.unwrap();
        drop(flow);

        assert!(!submit.is_completed(&draft_id));
    }
}
