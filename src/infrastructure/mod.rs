//! Infrastructure layer - transport, aggregation, storage and state stores

pub mod api;
pub mod logging;
pub mod overview;
pub mod storage;
pub mod stores;
