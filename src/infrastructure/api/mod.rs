//! Typed HTTP client for the NeuroForge backend

mod client;
pub mod transport;

pub use client::{
    ApiClient, DEFAULT_EVALUATION_BATCH_SIZE, DEFAULT_HISTORY_LIMIT, DEFAULT_LOG_LIMIT,
    DEFAULT_TIME_RANGE,
};
pub use transport::{ApiRequest, HttpTransport, Method, ReqwestTransport};
