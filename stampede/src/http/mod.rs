pub mod executor;

use crate::args::StampedeArgs;
use crate::error::StampedeError;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use std::time::Duration;

/// Everything needed to issue one request cycle. Built once by the
/// coordinator and shared read-only by all workers.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Duration,
}

impl RequestSpec {
    pub fn from_args(args: &StampedeArgs) -> Result<Self, StampedeError> {
        let method = Method::from_bytes(args.method.to_uppercase().as_bytes())
            .map_err(|_| StampedeError::InvalidMethod(args.method.clone()))?;
        let url = Url::parse(&args.url)
            .map_err(|_| StampedeError::CannotParseUrl(args.url.clone()))?;

        let mut headers = HeaderMap::new();
        for pair in &args.headers {
            let name = HeaderName::from_bytes(pair.name.as_bytes())
                .map_err(|_| StampedeError::InvalidHeader(pair.name.clone()))?;
            let value = HeaderValue::from_str(&pair.value)
                .map_err(|_| StampedeError::InvalidHeader(pair.value.clone()))?;
            headers.insert(name, value);
        }

        let body = if let Some(json) = &args.json {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            Some(Bytes::from(json.clone().into_bytes()))
        } else {
            args.data
                .as_ref()
                .map(|data| Bytes::from(data.clone().into_bytes()))
        };

        Ok(RequestSpec {
            method,
            url,
            headers,
            body,
            timeout: Duration::from_secs_f64(args.timeout),
        })
    }
}

/// Builds the one shared transport. The idle pool is sized to the worker
/// count, so the number of workers equals the connection budget; disabling
/// keep-alive shrinks the pool to zero and forces a fresh connection per
/// cycle.
pub fn build_client(concurrency: u32, keep_alive: bool) -> Result<Client, StampedeError> {
    let pool_size = if keep_alive { concurrency as usize } else { 0 };
    let client = Client::builder().pool_max_idle_per_host(pool_size).build()?;
    Ok(client)
}
