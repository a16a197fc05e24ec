pub mod client;

pub use client::{StoreClient, StoreError};
