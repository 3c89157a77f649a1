pub mod client;
pub mod format;

pub use client::{AlertsClient, AlertsError, MapbiomasConfig, alert_period};
pub use format::format_alerts;
