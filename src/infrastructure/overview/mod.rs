//! Overview aggregation - pluggable section sources and the fan-out/fan-in
//! service that joins them into one snapshot

mod live;
mod mock;
mod service;
mod source;

pub use live::LiveOverviewSource;
pub use mock::MockOverviewSource;
pub use service::{quick_actions, OverviewService, FETCH_ERROR, PARTIAL_FETCH_ERROR};
pub use source::OverviewSource;
