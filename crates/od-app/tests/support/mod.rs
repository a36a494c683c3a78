//! Hand-written port doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use od_app::AppDeps;
use od_core::ids::OrphanageId;
use od_core::orphanage::{OrphanageDetail, OrphanageSummary};
use od_core::ports::{
    AlertPort, ApiError, ImagePickerPort, OrphanageApiPort, PermissionStatus, PickerError,
    PickerOptions, PickerResult,
};
use od_core::registration::RegistrationPayload;

#[derive(Default)]
pub struct MockApi {
    pub orphanages: Mutex<Vec<OrphanageSummary>>,
    pub details: Mutex<HashMap<OrphanageId, OrphanageDetail>>,
    /// Results handed out by `create_orphanage`, front first; empty means Ok.
    pub create_results: Mutex<VecDeque<Result<(), ApiError>>>,
    pub created: Mutex<Vec<RegistrationPayload>>,
    pub list_calls: AtomicUsize,
    pub list_fails: Mutex<bool>,
}

impl MockApi {
    pub fn with_orphanages(orphanages: Vec<OrphanageSummary>) -> Self {
        Self {
            orphanages: Mutex::new(orphanages),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<RegistrationPayload> {
        self.created.lock().unwrap().clone()
    }

    pub fn fail_next_create(&self, err: ApiError) {
        self.create_results.lock().unwrap().push_back(Err(err));
    }
}

#[async_trait]
impl OrphanageApiPort for MockApi {
    async fn list_orphanages(&self) -> Result<Vec<OrphanageSummary>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if *self.list_fails.lock().unwrap() {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(self.orphanages.lock().unwrap().clone())
    }

    async fn get_orphanage(&self, id: OrphanageId) -> Result<OrphanageDetail, ApiError> {
        self.details
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create_orphanage(&self, payload: &RegistrationPayload) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(payload.clone());
        let result = self.create_results.lock().unwrap().pop_front();
        match result {
            Some(result) => result,
            None => {
                // The server now lists the new record.
                let mut list = self.orphanages.lock().unwrap();
                let id = OrphanageId::new(list.len() as u64 + 1);
                list.push(OrphanageSummary {
                    id,
                    latitude: payload.text_value("latitude").unwrap().parse().unwrap(),
                    longitude: payload.text_value("longitude").unwrap().parse().unwrap(),
                    name: payload.text_value("name").unwrap().to_string(),
                });
                Ok(())
            }
        }
    }
}

pub struct MockPicker {
    pub permission: Mutex<PermissionStatus>,
    pub results: Mutex<VecDeque<PickerResult>>,
    pub launches: AtomicUsize,
}

impl MockPicker {
    pub fn granted(results: Vec<PickerResult>) -> Self {
        Self {
            permission: Mutex::new(PermissionStatus::Granted),
            results: Mutex::new(results.into()),
            launches: AtomicUsize::new(0),
        }
    }

    pub fn set_permission(&self, status: PermissionStatus) {
        *self.permission.lock().unwrap() = status;
    }
}

#[async_trait]
impl ImagePickerPort for MockPicker {
    async fn request_media_library_permission(&self) -> Result<PermissionStatus, PickerError> {
        Ok(*self.permission.lock().unwrap())
    }

    async fn launch_image_library(
        &self,
        _options: PickerOptions,
    ) -> Result<PickerResult, PickerError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PickerResult::Cancelled))
    }
}

#[derive(Default)]
pub struct RecordingAlert {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertPort for RecordingAlert {
    async fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn picked(uri: &str) -> PickerResult {
    PickerResult::Picked {
        uri: uri.to_string(),
    }
}

pub fn summary(id: u64, name: &str) -> OrphanageSummary {
    OrphanageSummary {
        id: OrphanageId::new(id),
        latitude: -6.52,
        longitude: -38.41,
        name: name.to_string(),
    }
}

pub fn deps(
    api: &Arc<MockApi>,
    picker: &Arc<MockPicker>,
    alert: &Arc<RecordingAlert>,
) -> AppDeps {
    AppDeps {
        api: api.clone(),
        image_picker: picker.clone(),
        alert: alert.clone(),
    }
}
