//! HTTP transport trait.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use askboard_types::error::ApiError;
use askboard_types::http::{ApiRequest, RawResponse};

/// Sends one request and returns whatever the server answered.
///
/// Implementations must return `Ok` for every status code the server sent
/// (including 4xx/5xx) and reserve `Err(ApiError::Network)` for requests
/// that never got a response. Status interpretation is the client's job.
pub trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>> + Send;
}

/// Object-safe version of [`HttpTransport`].
pub trait HttpTransportDyn: Send + Sync {
    fn send_boxed(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, ApiError>> + Send + '_>>;
}

impl<T: HttpTransport> HttpTransportDyn for T {
    fn send_boxed(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, ApiError>> + Send + '_>> {
        Box::pin(self.send(request))
    }
}

pub type DynTransport = Arc<dyn HttpTransportDyn>;
