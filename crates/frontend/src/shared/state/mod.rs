//! Process-wide state for the product authoring flow: the draft model, its
//! reactive store and the persistence slot it serializes into.

pub mod draft;
pub mod storage;

pub use draft::{DraftError, DraftStore, MoveDirection, ProductDraft};
pub use storage::{SessionStorageSlot, SnapshotSlot};
