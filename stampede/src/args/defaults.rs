pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_CONCURRENCY: u32 = 50;
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;
