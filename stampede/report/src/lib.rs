pub mod error_kind;
pub mod latency;
pub mod mode;
pub mod params;
pub mod percentile;
pub mod prints;
pub mod report;
pub mod utils;

pub use error_kind::ErrorKind;
pub use latency::LatencyMetrics;
pub use mode::DispatchMode;
pub use params::LoadParams;
pub use percentile::percentile;
pub use report::LoadReport;
