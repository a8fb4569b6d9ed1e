use leptos::prelude::Set;

use contracts::domain::draft::{DraftSnapshot, DRAFT_STORAGE_KEY};

use super::draft::{DraftStore, ProductDraft};

/// One named string slot in browser-scoped storage. A trait seam so the
/// draft round-trip is exercised without a browser.
pub trait SnapshotSlot {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, payload: &str);
    fn clear(&self, key: &str);
}

/// Slot backed by `sessionStorage`: the draft survives reloads within the
/// tab and is discarded with the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorageSlot;

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

impl SnapshotSlot for SessionStorageSlot {
    fn read(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, payload: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, payload);
        }
    }

    fn clear(&self, key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Serializes the draft into the slot. Returns whether the write happened.
pub fn save_draft(draft: &ProductDraft, slot: &impl SnapshotSlot) -> bool {
    match serde_json::to_string(&draft.snapshot()) {
        Ok(json) => {
            slot.write(DRAFT_STORAGE_KEY, &json);
            true
        }
        Err(e) => {
            log::error!("failed to serialize draft: {e}");
            false
        }
    }
}

/// Reads the slot back into a draft. `None` when the slot is empty or the
/// payload does not parse; a malformed payload is a load failure, never a
/// panic. Legacy single-language field values are upgraded during parsing.
pub fn load_draft(slot: &impl SnapshotSlot) -> Option<ProductDraft> {
    let payload = slot.read(DRAFT_STORAGE_KEY)?;
    match serde_json::from_str::<DraftSnapshot>(&payload) {
        Ok(snapshot) => Some(ProductDraft::restore(snapshot)),
        Err(e) => {
            log::error!("failed to parse stored draft: {e}");
            None
        }
    }
}

impl DraftStore {
    /// Persists the current draft; returns whether it was written.
    pub fn persist(&self, slot: &impl SnapshotSlot) -> bool {
        self.with(|draft| save_draft(draft, slot))
    }

    /// Adopts the persisted draft into live state; returns whether data was
    /// found and loaded.
    pub fn load(&self, slot: &impl SnapshotSlot) -> bool {
        match load_draft(slot) {
            Some(draft) => {
                self.signal().set(draft);
                true
            }
            None => false,
        }
    }
}

/// Drops the persisted snapshot, e.g. after successful submission.
pub fn clear_draft(slot: &impl SnapshotSlot) {
    slot.clear(DRAFT_STORAGE_KEY);
}

/// In-memory slot for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySlot {
    slots: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SnapshotSlot for MemorySlot {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, payload: &str) {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
    }

    fn clear(&self, key: &str) {
        self.slots.lock().unwrap().remove(key);
    }
}
