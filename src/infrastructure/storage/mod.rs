//! Local durable storage - the console-side stand-in for browser storage

mod local;

pub use local::{FileLocalStore, InMemoryLocalStore, LocalStore};
