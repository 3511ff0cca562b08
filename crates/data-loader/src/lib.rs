// File: crates/data-loader/src/lib.rs
// Summary: Dataset loading: one fetch, status check, JSON decode into a `Dataset`.

pub mod error;
pub mod payload;
pub mod loader;

pub use error::FetchError;
pub use payload::{decode, GdpPayload};
pub use loader::{load, DataLoader, Source, DEFAULT_DATA_URL};
