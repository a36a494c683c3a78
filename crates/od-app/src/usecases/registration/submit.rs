use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, warn, Instrument};

use od_core::ids::DraftId;
use od_core::ports::OrphanageApiPort;
use od_core::registration::DraftRegistration;

use super::SubmitError;

#[derive(Debug, Default)]
struct SubmissionLedger {
    in_flight: HashSet<DraftId>,
    completed: HashSet<DraftId>,
}

/// Releases the in-flight slot of one draft when dropped, including when the
/// submit future itself is dropped mid-request.
struct InFlightGuard {
    ledger: Arc<Mutex<SubmissionLedger>>,
    draft_id: DraftId,
    completed: bool,
}

impl InFlightGuard {
    fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut ledger = lock(&self.ledger);
        ledger.in_flight.remove(&self.draft_id);
        if self.completed {
            ledger.completed.insert(self.draft_id.clone());
        }
    }
}

fn lock(ledger: &Mutex<SubmissionLedger>) -> MutexGuard<'_, SubmissionLedger> {
    ledger.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Send a draft to `POST orphanages`, at most once at a time per draft.
///
/// - a second call while the first is pending fails with
///   [`SubmitError::AlreadyInFlight`] and does not hit the network;
/// - once a draft is accepted every later call fails with
///   [`SubmitError::AlreadySubmitted`];
/// - failures and cancellations free the draft for another attempt.
pub struct SubmitRegistration {
    api: Arc<dyn OrphanageApiPort>,
    ledger: Arc<Mutex<SubmissionLedger>>,
}

impl SubmitRegistration {
    pub fn new(api: Arc<dyn OrphanageApiPort>) -> Self {
        Self {
            api,
            ledger: Arc::new(Mutex::new(SubmissionLedger::default())),
        }
    }

    pub fn is_in_flight(&self, draft_id: &DraftId) -> bool {
        lock(&self.ledger).in_flight.contains(draft_id)
    }

    pub fn is_completed(&self, draft_id: &DraftId) -> bool {
        lock(&self.ledger).completed.contains(draft_id)
    }

    /// Drops everything recorded for a draft whose form is gone.
    pub fn forget(&self, draft_id: &DraftId) {
        if lock(&self.ledger).completed.remove(draft_id) {
            debug!(%draft_id, "registered draft forgotten");
        }
    }

    pub async fn execute(
        &self,
        draft: &DraftRegistration,
        cancel: &CancellationToken,
    ) -> Result<(), SubmitError> {
        let guard = self.acquire(&draft.id)?;
        let payload = draft.to_payload();

        let span = info_span!(
            "usecase.submit_registration.execute",
            draft_id = %draft.id,
            images = payload.images.len()
        );
        async move {
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    warn!("registration submission cancelled");
                    return Err(SubmitError::Cancelled);
                }
                result = self.api.create_orphanage(&payload) => result,
            };

            match result {
                Ok(()) => {
                    guard.complete();
                    info!("orphanage registered");
                    Ok(())
                }
                Err(err) => {
                    error!(error = %err, transient = err.is_transient(), "registration failed");
                    Err(SubmitError::Api(err))
                }
            }
        }
        .instrument(span)
        .await
    }

    fn acquire(&self, draft_id: &DraftId) -> Result<InFlightGuard, SubmitError> {
        let mut ledger = lock(&self.ledger);
        if ledger.completed.contains(draft_id) {
            warn!(%draft_id, "draft already registered, ignoring submit");
            return Err(SubmitError::AlreadySubmitted);
        }
        if !ledger.in_flight.insert(draft_id.clone()) {
            warn!(%draft_id, "submission already in flight, ignoring submit");
            return Err(SubmitError::AlreadyInFlight);
        }
        Ok(InFlightGuard {
            ledger: Arc::clone(&self.ledger),
            draft_id: draft_id.clone(),
            completed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use od_core::geo::Coordinate;
    use od_core::ids::OrphanageId;
    use od_core::orphanage::{OrphanageDetail, OrphanageSummary};
    use od_core::ports::ApiError;
    use od_core::registration::{LocalImage, RegistrationForm, RegistrationPayload};
    use tokio::sync::Notify;

    /// API double whose `create_orphanage` blocks until released.
    struct GatedApi {
        calls: AtomicUsize,
        gate: Notify,
        fail_first: bool,
        payloads: Mutex<Vec<RegistrationPayload>>,
    }

    impl GatedApi {
        fn new(fail_first: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: Notify::new(),
                fail_first,
                payloads: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OrphanageApiPort for GatedApi {
        async fn list_orphanages(&self) -> Result<Vec<OrphanageSummary>, ApiError> {
            Ok(vec![])
        }

        async fn get_orphanage(&self, id: OrphanageId) -> Result<OrphanageDetail, ApiError> {
            Err(ApiError::NotFound(id.to_string()))
        }

        async fn create_orphanage(&self, payload: &RegistrationPayload) -> Result<(), ApiError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.payloads.lock().unwrap().push(payload.clone());
            self.gate.notified().await;
            if self.fail_first && call == 0 {
                Err(ApiError::Server { status: 500 })
            } else {
                Ok(())
            }
        }
    }

    fn draft() -> DraftRegistration {
        let mut form = RegistrationForm::new(Coordinate::new(-6.52, -38.42).unwrap());
        form.name = "Lar Feliz".to_string();
        form.push_image(LocalImage::new("file://a.jpg"));
        form.snapshot()
    }

    #[tokio::test]
    async fn double_submit_produces_a_single_call() {
        let api = Arc::new(GatedApi::new(false));
        let uc = SubmitRegistration::new(api.clone());
        let draft = draft();
        let cancel = CancellationToken::new();

        let first = uc.execute(&draft, &cancel);
        let second = async {
            // Let the first call reach the API before tapping again.
            while api.calls() == 0 {
                tokio::task::yield_now().await;
            }
            let result = uc.execute(&draft, &cancel).await;
            api.gate.notify_one();
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(SubmitError::AlreadyInFlight));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn success_is_final_for_the_draft() {
        let api = Arc::new(GatedApi::new(false));
        api.gate.notify_one();
        let uc = SubmitRegistration::new(api.clone());
        let draft = draft();
        let cancel = CancellationToken::new();

        uc.execute(&draft, &cancel).await.unwrap();
        let again = uc.execute(&draft, &cancel).await;

        assert_eq!(again, Err(SubmitError::AlreadySubmitted));
        assert_eq!(api.calls(), 1);
        assert!(uc.is_completed(&draft.id));
        assert!(!uc.is_in_flight(&draft.id));
    }

    #[tokio::test]
    async fn forgotten_draft_leaves_nothing_behind() {
        let api = Arc::new(GatedApi::new(false));
        api.gate.notify_one();
        let uc = SubmitRegistration::new(api.clone());
        let draft = draft();
        let cancel = CancellationToken::new();

        uc.execute(&draft, &cancel).await.unwrap();
        uc.forget(&draft.id);

        assert!(!uc.is_completed(&draft.id));
        assert!(lock(&uc.ledger).completed.is_empty());
    }

    #[tokio::test]
    async fn failure_allows_identical_resubmission() {
        let api = Arc::new(GatedApi::new(true));
        let uc = SubmitRegistration::new(api.clone());
        let draft = draft();
        let cancel = CancellationToken::new();

        api.gate.notify_one();
        let first = uc.execute(&draft, &cancel).await;
        assert_eq!(
            first,
            Err(SubmitError::Api(ApiError::Server { status: 500 }))
        );
        assert!(first.unwrap_err().allows_retry());
        assert!(!uc.is_in_flight(&draft.id));

        api.gate.notify_one();
        uc.execute(&draft, &cancel).await.unwrap();

        let payloads = api.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0], payloads[1]);
    }

    #[tokio::test]
    async fn cancellation_releases_the_draft() {
        let api = Arc::new(GatedApi::new(false));
        let uc = SubmitRegistration::new(api.clone());
        let draft = draft();
        let cancel = CancellationToken::new();

        let pending = uc.execute(&draft, &cancel);
        let canceller = async {
            while api.calls() == 0 {
                tokio::task::yield_now().await;
            }
            cancel.cancel();
        };
        let (result, ()) = tokio::join!(pending, canceller);

        assert_eq!(result, Err(SubmitError::Cancelled));
        assert!(!uc.is_in_flight(&draft.id));
        assert!(!uc.is_completed(&draft.id));
    }

    #[tokio::test]
    async fn already_cancelled_token_skips_the_network() {
        let api = Arc::new(GatedApi::new(false));
        let uc = SubmitRegistration::new(api.clone());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = uc.execute(&draft(), &cancel).await;

        assert_eq!(result, Err(SubmitError::Cancelled));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn distinct_drafts_do_not_block_each_other() {
        let api = Arc::new(GatedApi::new(false));
        let uc = SubmitRegistration::new(api.clone());
        let (a, b) = (draft(), draft());
        let cancel = CancellationToken::new();

        let release = async {
            while api.calls() < 2 {
                tokio::task::yield_now().await;
            }
            api.gate.notify_one();
            api.gate.notify_one();
        };
        let (ra, rb, ()) = tokio::join!(uc.execute(&a, &cancel), uc.execute(&b, &cancel), release);

        assert_eq!(ra, Ok(()));
        assert_eq!(rb, Ok(()));
        assert_eq!(api.calls(), 2);
    }
}
