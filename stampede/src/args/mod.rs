pub mod defaults;

use self::defaults::*;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use stampede_report::{DispatchMode, LoadParams};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Concurrent HTTP load generation tool", long_about = None)]
pub struct StampedeArgs {
    /// Target URL (e.g. http://127.0.0.1:8000/api/ping)
    #[arg(long)]
    pub url: String,

    /// HTTP method (GET/POST/PUT/...), case-insensitive
    #[arg(long, default_value_t = DEFAULT_METHOD.to_owned())]
    pub method: String,

    /// Number of concurrent workers, which is also the connection budget
    #[arg(long, short = 'c', default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: u32,

    /// Seconds to run (use this OR --requests)
    #[arg(long, short = 'd', default_value_t = 0.0)]
    pub duration: f64,

    /// Total number of requests (use this OR --duration)
    #[arg(long, short = 'n', default_value_t = 0)]
    pub requests: u64,

    /// Per-request timeout in seconds
    #[arg(long, short = 't', default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Extra header, e.g. --header "Authorization: Bearer X"; repeatable
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<HeaderPair>,

    /// JSON body string, e.g. '{"x":1}'; sets Content-Type when absent
    #[arg(long, conflicts_with = "data")]
    pub json: Option<String>,

    /// Raw body string (sent as-is)
    #[arg(long)]
    pub data: Option<String>,

    /// Disable keep-alive (usually slower)
    #[arg(long = "no-keepalive", default_value_t = false)]
    pub no_keepalive: bool,

    /// Output directory path for storing the JSON report
    #[arg(long)]
    pub output_dir: Option<String>,
}

/// One parsed `"Key: Value"` header flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPair {
    pub name: String,
    pub value: String,
}

fn parse_header(v: &str) -> Result<HeaderPair, String> {
    match v.split_once(':') {
        Some((name, value)) => Ok(HeaderPair {
            name: name.trim().to_owned(),
            value: value.trim().to_owned(),
        }),
        None => Err(format!("bad header format: {v:?}, use 'Key: Value'")),
    }
}

impl StampedeArgs {
    /// Reports configuration errors and exits before any network activity.
    pub fn validate(&self) {
        if self.mode_conflict() {
            StampedeArgs::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    "Provide exactly one of --duration (seconds) OR --requests (total).",
                )
                .exit();
        }
        if self.timeout <= 0.0 {
            StampedeArgs::command()
                .error(ErrorKind::InvalidValue, "--timeout must be positive.")
                .exit();
        }
        if let Some(json) = &self.json {
            if let Err(err) = serde_json::from_str::<serde_json::Value>(json) {
                StampedeArgs::command()
                    .error(ErrorKind::InvalidValue, format!("Invalid --json body: {err}"))
                    .exit();
            }
        }
    }

    /// True when both or neither of the dispatch modes were requested.
    pub fn mode_conflict(&self) -> bool {
        (self.duration <= 0.0) == (self.requests == 0)
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        if self.duration > 0.0 {
            DispatchMode::Duration {
                secs: self.duration,
            }
        } else {
            DispatchMode::RequestCount {
                count: self.requests,
            }
        }
    }

    pub fn keep_alive(&self) -> bool {
        !self.no_keepalive
    }
}

impl From<&StampedeArgs> for LoadParams {
    fn from(args: &StampedeArgs) -> Self {
        LoadParams {
            url: args.url.clone(),
            method: args.method.to_uppercase(),
            concurrency: args.concurrency,
            mode: args.dispatch_mode(),
            timeout_secs: args.timeout,
            keep_alive: args.keep_alive(),
        }
    }
}
