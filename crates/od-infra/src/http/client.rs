use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::from_slice;
use tokio::time::sleep;
use tracing::{error, info, info_span, warn, Instrument};

use od_core::config::AppConfig;
use od_core::ids::OrphanageId;
use od_core::orphanage::{OrphanageDetail, OrphanageSummary};
use od_core::ports::{ApiError, OrphanageApiPort};
use od_core::registration::RegistrationPayload;

use super::error::{map_reqwest_error, map_status_code};
use super::multipart::build_form;

type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_backoff: Duration,
}

impl HttpApiConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            retry_attempts: config.read_retries,
            retry_backoff: Duration::from_millis(200),
        }
    }
}

/// reqwest implementation of [`OrphanageApiPort`].
///
/// Reads (`GET orphanages`, `GET orphanages/{id}`) are retried on transient
/// failures; `POST orphanages` is sent exactly once per call.
pub struct HttpOrphanageApi {
    client: Client,
    base_url: Url,
    retry_attempts: u32,
    retry_backoff: Duration,
}

impl HttpOrphanageApi {
    pub fn new(config: HttpApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url)?,
            retry_attempts: config.retry_attempts,
            retry_backoff: config.retry_backoff,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid endpoint {path}: {e}")))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = check_status(response)
            .await?
            .bytes()
            .await
            .map_err(map_reqwest_error)?;
        from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn retry<F, Fut, T>(&self, op: &str, mut action: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match action().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.retry_attempts && err.is_transient() => {
                    let backoff = self.retry_backoff * (attempt + 1);
                    warn!(op, attempt = attempt + 1, error = %err, ?backoff, "request failed, retrying");
                    sleep(backoff).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(op, attempts = attempt + 1, error = %err, "request failed");
                    return Err(err);
                }
            }
        }
    }
}

#[async_trait]
impl OrphanageApiPort for HttpOrphanageApi {
    async fn list_orphanages(&self) -> ApiResult<Vec<OrphanageSummary>> {
        let url = self.endpoint("orphanages")?;
        let span = info_span!("infra.http.list_orphanages", url = %url);
        async {
            let orphanages: Vec<OrphanageSummary> = self
                .retry("list_orphanages", || self.get_json(url.clone()))
                .await?;
            info!(count = orphanages.len(), "orphanages fetched");
            Ok(orphanages)
        }
        .instrument(span)
        .await
    }

    async fn get_orphanage(&self, id: OrphanageId) -> ApiResult<OrphanageDetail> {
        let url = self.endpoint(&format!("orphanages/{id}"))?;
        let span = info_span!("infra.http.get_orphanage", orphanage_id = %id);
        async {
            self.retry("get_orphanage", || self.get_json::<OrphanageDetail>(url.clone()))
                .await
                .map_err(|err| match err {
                    ApiError::NotFound(_) => ApiError::NotFound(id.to_string()),
                    other => other,
                })
        }
        .instrument(span)
        .await
    }

    async fn create_orphanage(&self, payload: &RegistrationPayload) -> ApiResult<()> {
        let url = self.endpoint("orphanages")?;
        let span = info_span!(
            "infra.http.create_orphanage",
            url = %url,
            images = payload.images.len()
        );
        async {
            let form = build_form(payload).await?;
            let response = self
                .client
                .post(url)
                .multipart(form)
                .send()
                .await
                .map_err(map_reqwest_error)?;
            let status = check_status(response).await?.status();
            info!(status = status.as_u16(), "orphanage created");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(map_status_code(status, body))
}

/// Ensures the base URL ends with `/` so endpoints join below it.
fn normalize_base_url(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| ApiError::Config(format!("invalid base URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::Config(format!(
            "unsupported scheme {other:?} in base URL"
        ))),
    }
}
