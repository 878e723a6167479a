mod gracefullshutdown;
mod logs;
mod metrics;
mod otel;
mod slug;
mod tracker;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::otel::{Telemetry, TracingContext};
pub use self::slug::slugify;
pub use self::tracker::ServiceTracker;
