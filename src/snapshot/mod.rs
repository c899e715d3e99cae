//! Form snapshots: the raw text of every field, persisted between sessions.

mod form;
mod store;

pub use form::{DeductionRow, FormSnapshot};
pub use store::{JsonFileStore, SnapshotStore};
