//! Card collection: models and the owning store

pub mod models;
pub mod store;

pub use models::{Card, CardId};
pub use store::{CardStore, CardStoreError};
