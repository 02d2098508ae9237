use super::RequestSpec;
use reqwest::Client;
use stampede_report::ErrorKind;
use tokio::time::Instant;

/// Classification of one finished request cycle. Every cycle lands in
/// exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Response received and fully read; 4xx/5xx still count here.
    Completed { status: u16, latency_ms: f64 },
    Failed(ErrorKind),
}

/// Performs exactly one request/response cycle against the target.
///
/// The body is always drained in full so the connection can be reused by
/// the next cycle on the same worker. Latency covers the span from just
/// before the request is issued to just after the drain. One attempt per
/// cycle, no retries.
pub async fn execute(client: &Client, spec: &RequestSpec) -> Outcome {
    let start = Instant::now();
    match perform(client, spec).await {
        Ok(status) => Outcome::Completed {
            status,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
        Err(error) => Outcome::Failed(classify(&error)),
    }
}

async fn perform(client: &Client, spec: &RequestSpec) -> Result<u16, reqwest::Error> {
    let mut request = client
        .request(spec.method.clone(), spec.url.clone())
        .headers(spec.headers.clone())
        .timeout(spec.timeout);
    if let Some(body) = &spec.body {
        request = request.body(body.clone());
    }

    let response = request.send().await?;
    let status = response.status().as_u16();
    response.bytes().await?;
    Ok(status)
}

fn classify(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() {
        ErrorKind::Timeout
    } else if error.is_connect() {
        ErrorKind::Connect
    } else if error.is_body() || error.is_decode() || error.is_redirect() {
        ErrorKind::Protocol
    } else {
        ErrorKind::Other
    }
}
