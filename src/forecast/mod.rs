mod error;
mod format;
mod model;
mod revision;
mod table;

pub use format::{format_change, format_compact, format_millions, format_percent};
pub use model::{Component, MetricStatus, Revision, Scenario, ViewId};
pub use table::{ScenarioTable, verify_all};
