//! Browser fetch transport for the data API client

use async_trait::async_trait;
use contracts::shared::api::{ApiError, ApiRequest, ApiResponse, HttpMethod, HttpTransport};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::AbortController;

/// `gloo-net` transport with a per-request timeout
///
/// The timeout aborts the underlying fetch through an `AbortController`;
/// a `timeout_ms` of 0 disables it.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    fn builder(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let signal = controller.signal();

        let timed_out = Rc::new(Cell::new(false));
        // Dropping the handle cancels the timer once the response is in.
        let _timer = (self.timeout_ms > 0).then(|| {
            let timed_out = timed_out.clone();
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        });

        let builder = self
            .builder(request.method, &request.path)
            .header("Accept", "application/json")
            .abort_signal(Some(&signal));

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };

        let response = match sent {
            Ok(response) => response,
            Err(_) if timed_out.get() => return Err(ApiError::Timeout(self.timeout_ms)),
            Err(e) => return Err(ApiError::Network(e.to_string())),
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if timed_out.get() {
                ApiError::Timeout(self.timeout_ms)
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        Ok(ApiResponse { status, body })
    }
}
