use contracts::domain::draft::{
    DraftSnapshot, FieldKind, InputField, ListItem, DEFAULT_IMAGE_SLOTS,
};
use contracts::shared::localized::{Language, LocalizedText};
use leptos::prelude::*;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The slot array must already be long enough; callers grow it with
    /// `add_image_slots` before writing past the end.
    #[error("image slot {index} does not exist ({len} slots)")]
    IndexOutOfRange { index: usize, len: usize },
    /// The draft keeps at least one product-name field at all times.
    #[error("the last product name field cannot be removed")]
    LastProductName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// The in-progress product being authored: image slots, localized input
/// fields, the chosen product type and the viewer language. One instance
/// per session, mutated synchronously through the methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub images: Vec<String>,
    pub fields: Vec<InputField>,
    pub selected_product_type_id: Option<String>,
    pub active_language: Language,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            images: vec![String::new(); DEFAULT_IMAGE_SLOTS],
            fields: vec![
                new_field(FieldKind::ProductName),
                new_field(FieldKind::ProductTitle),
                new_field(FieldKind::GeneralInfo),
            ],
            selected_product_type_id: None,
            active_language: Language::Uk,
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn new_field(kind: FieldKind) -> InputField {
    InputField {
        id: new_id(),
        kind,
        label: kind.default_label().to_string(),
        value: LocalizedText::default(),
        items: match kind {
            FieldKind::List => Some(vec![ListItem::empty(new_id())]),
            _ => None,
        },
    }
}

impl ProductDraft {
    /// Writes an image slot in place. The index must address an existing
    /// slot.
    pub fn set_image_at(&mut self, index: usize, value: impl Into<String>) -> Result<(), DraftError> {
        let len = self.images.len();
        let slot = self
            .images
            .get_mut(index)
            .ok_or(DraftError::IndexOutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    /// Appends `count` empty slots. Slots are never removed.
    pub fn add_image_slots(&mut self, count: usize) {
        self.images
            .extend(std::iter::repeat_with(String::new).take(count));
    }

    pub fn set_field_value(&mut self, field_id: &str, language: Language, text: &str) {
        match self.fields.iter_mut().find(|f| f.id == field_id) {
            Some(field) => field.value.set(language, text),
            None => log::warn!("set_field_value: no field {field_id}"),
        }
    }

    /// Appends a field of the given kind; list fields start with one empty
    /// item. Returns the new field's id.
    pub fn add_field(&mut self, kind: FieldKind) -> String {
        let field = new_field(kind);
        let id = field.id.clone();
        self.fields.push(field);
        id
    }

    /// Removes a field, unless it is the last remaining product-name field.
    /// That rejection is a user-facing warning, not a hard failure; unknown
    /// ids are ignored.
    pub fn remove_field(&mut self, field_id: &str) -> Result<(), DraftError> {
        let Some(position) = self.fields.iter().position(|f| f.id == field_id) else {
            log::warn!("remove_field: no field {field_id}");
            return Ok(());
        };
        if self.fields[position].kind == FieldKind::ProductName && self.product_name_count() == 1 {
            return Err(DraftError::LastProductName);
        }
        self.fields.remove(position);
        Ok(())
    }

    pub fn product_name_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::ProductName)
            .count()
    }

    /// Appends an empty item to a list field; returns the new item's id, or
    /// `None` (logged) when the field is missing or not a list.
    pub fn add_list_item(&mut self, field_id: &str) -> Option<String> {
        let Some(items) = self.list_items_mut(field_id) else {
            log::warn!("add_list_item: no list field {field_id}");
            return None;
        };
        let id = new_id();
        items.push(ListItem::empty(id.clone()));
        Some(id)
    }

    /// Appends an empty entry to the sublist of a top-level item; returns
    /// the new entry's id, or `None` (logged) when the target is missing.
    pub fn add_sublist_item(&mut self, field_id: &str, item_id: &str) -> Option<String> {
        let Some(items) = self.list_items_mut(field_id) else {
            log::warn!("add_sublist_item: no list field {field_id}");
            return None;
        };
        let Some(item) = items.iter_mut().find(|item| item.id == item_id) else {
            log::warn!("add_sublist_item: no item {item_id} in field {field_id}");
            return None;
        };
        let id = new_id();
        item.sublist
            .get_or_insert_with(Vec::new)
            .push(ListItem::empty(id.clone()));
        Some(id)
    }

    /// Updates one language of one list item's text. The item is addressed
    /// by id at any nesting level; the text is never inspected for shape.
    /// Structural edits go through [`Self::replace_list_item_structure`].
    pub fn update_list_item_content(
        &mut self,
        field_id: &str,
        item_id: &str,
        language: Language,
        text: &str,
    ) -> bool {
        let Some(items) = self.list_items_mut(field_id) else {
            log::warn!("update_list_item_content: no list field {field_id}");
            return false;
        };
        match find_item_mut(items, item_id) {
            Some(item) => {
                item.content.set(language, text);
                true
            }
            None => {
                log::warn!("update_list_item_content: no item {item_id} in field {field_id}");
                false
            }
        }
    }

    /// Replaces the sublist of the addressed item wholesale. Explicitly
    /// separate from text updates so a value that happens to look like
    /// structured data is never misread as a structural edit.
    pub fn replace_list_item_structure(
        &mut self,
        field_id: &str,
        item_id: &str,
        sublist: Vec<ListItem>,
    ) -> bool {
        let Some(items) = self.list_items_mut(field_id) else {
            log::warn!("replace_list_item_structure: no list field {field_id}");
            return false;
        };
        match find_item_mut(items, item_id) {
            Some(item) => {
                item.sublist = (!sublist.is_empty()).then_some(sublist);
                true
            }
            None => {
                log::warn!("replace_list_item_structure: no item {item_id} in field {field_id}");
                false
            }
        }
    }

    /// Swaps a field with its neighbour; out-of-range and boundary moves
    /// are no-ops.
    pub fn reorder_field(&mut self, index: usize, direction: MoveDirection) {
        match direction {
            MoveDirection::Up if index > 0 && index < self.fields.len() => {
                self.fields.swap(index - 1, index);
            }
            MoveDirection::Down if index + 1 < self.fields.len() => {
                self.fields.swap(index, index + 1);
            }
            _ => {}
        }
    }

    pub fn set_selected_product_type_id(&mut self, id: Option<String>) {
        self.selected_product_type_id = id;
    }

    pub fn set_active_language(&mut self, language: Language) {
        self.active_language = language;
    }

    /// Plain snapshot of the whole draft, ready for persistence.
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            product_images: self.images.clone(),
            product_info: self.fields.clone(),
            active_language: self.active_language,
            selected_product_type_id: self.selected_product_type_id.clone(),
        }
    }

    pub fn restore(snapshot: DraftSnapshot) -> Self {
        Self {
            images: snapshot.product_images,
            fields: snapshot.product_info,
            selected_product_type_id: snapshot.selected_product_type_id,
            active_language: snapshot.active_language,
        }
    }

    /// Read-only lookup of a list item by id, at any nesting level.
    pub fn find_list_item(&self, field_id: &str, item_id: &str) -> Option<&ListItem> {
        self.fields
            .iter()
            .find(|f| f.id == field_id && f.kind == FieldKind::List)
            .and_then(|f| f.items.as_deref())
            .and_then(|items| find_item(items, item_id))
    }

    fn list_items_mut(&mut self, field_id: &str) -> Option<&mut Vec<ListItem>> {
        self.fields
            .iter_mut()
            .find(|f| f.id == field_id && f.kind == FieldKind::List)
            .and_then(|f| f.items.as_mut())
    }
}

fn find_item<'a>(items: &'a [ListItem], id: &str) -> Option<&'a ListItem> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = item.sublist.as_deref().and_then(|sub| find_item(sub, id)) {
            return Some(found);
        }
    }
    None
}

fn find_item_mut<'a>(items: &'a mut [ListItem], id: &str) -> Option<&'a mut ListItem> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = item
            .sublist
            .as_mut()
            .and_then(|sub| find_item_mut(sub, id))
        {
            return Some(found);
        }
    }
    None
}

/// Reactive handle to the single draft instance, provided through context.
#[derive(Clone, Copy)]
pub struct DraftStore(RwSignal<ProductDraft>);

impl DraftStore {
    pub fn new() -> Self {
        Self(RwSignal::new(ProductDraft::default()))
    }

    pub fn signal(&self) -> RwSignal<ProductDraft> {
        self.0
    }

    pub fn with<R>(&self, f: impl FnOnce(&ProductDraft) -> R) -> R {
        self.0.with(f)
    }

    /// Read without subscribing; for use outside the reactive graph
    /// (async submission handlers).
    pub fn with_untracked<R>(&self, f: impl FnOnce(&ProductDraft) -> R) -> R {
        self.0.with_untracked(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut ProductDraft)) {
        self.0.update(f);
    }

    /// Runs a fallible draft action, handing the result back to the caller
    /// so the UI can surface rejected operations as warnings. `None` only
    /// when the signal has been disposed.
    pub fn try_update<R>(&self, f: impl FnOnce(&mut ProductDraft) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    pub fn reset(&self) {
        self.0.set(ProductDraft::default());
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_draft_matches_the_fixed_default() {
        let draft = ProductDraft::default();
        assert_eq!(draft.images.len(), DEFAULT_IMAGE_SLOTS);
        assert!(draft.images.iter().all(String::is_empty));
        let kinds: Vec<_> = draft.fields.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::ProductName,
                FieldKind::ProductTitle,
                FieldKind::GeneralInfo
            ]
        );
        assert_eq!(draft.active_language, Language::Uk);
        assert_eq!(draft.selected_product_type_id, None);
    }

    #[test]
    fn field_ids_are_unique_under_rapid_creation() {
        let mut draft = ProductDraft::default();
        let mut ids: Vec<String> = draft.fields.iter().map(|f| f.id.clone()).collect();
        for _ in 0..50 {
            ids.push(draft.add_field(FieldKind::GeneralInfo));
        }
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn last_product_name_field_cannot_be_removed() {
        let mut draft = ProductDraft::default();
        let name_id = draft.fields[0].id.clone();

        assert_eq!(
            draft.remove_field(&name_id),
            Err(DraftError::LastProductName)
        );
        assert_eq!(draft.product_name_count(), 1);

        // with a second name present the first one may go
        let second = draft.add_field(FieldKind::ProductName);
        assert_eq!(draft.remove_field(&name_id), Ok(()));
        assert_eq!(draft.product_name_count(), 1);
        assert_eq!(draft.remove_field(&second), Err(DraftError::LastProductName));
    }

    #[test]
    fn arbitrary_add_remove_sequences_keep_a_product_name() {
        let mut draft = ProductDraft::default();
        for round in 0..20 {
            if round % 3 == 0 {
                draft.add_field(FieldKind::ProductName);
            }
            let ids: Vec<String> = draft.fields.iter().map(|f| f.id.clone()).collect();
            for id in ids {
                let _ = draft.remove_field(&id);
            }
            assert!(draft.product_name_count() >= 1);
        }
    }

    #[test]
    fn removing_unknown_field_is_ignored() {
        let mut draft = ProductDraft::default();
        let before = draft.fields.len();
        assert_eq!(draft.remove_field("nope"), Ok(()));
        assert_eq!(draft.fields.len(), before);
    }

    #[test]
    fn image_slots_grow_and_reject_out_of_range_writes() {
        let mut draft = ProductDraft::default();
        let base = draft.images.len();

        draft.add_image_slots(3);
        assert_eq!(draft.images.len(), base + 3);

        assert_eq!(draft.set_image_at(base + 2, "data:image/png;base64,AA"), Ok(()));
        assert_eq!(draft.images[base + 2], "data:image/png;base64,AA");

        assert_eq!(
            draft.set_image_at(base + 3, "x"),
            Err(DraftError::IndexOutOfRange {
                index: base + 3,
                len: base + 3
            })
        );
    }

    #[test]
    fn field_value_updates_touch_only_one_language() {
        let mut draft = ProductDraft::default();
        let id = draft.fields[0].id.clone();

        draft.set_field_value(&id, Language::En, "Mug");
        draft.set_field_value(&id, Language::Uk, "Кухоль");

        assert_eq!(draft.fields[0].value.en, "Mug");
        assert_eq!(draft.fields[0].value.uk, "Кухоль");
    }

    #[test]
    fn list_fields_seed_one_empty_item() {
        let mut draft = ProductDraft::default();
        let id = draft.add_field(FieldKind::List);
        let field = draft.fields.iter().find(|f| f.id == id).unwrap();
        assert_eq!(field.items.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn list_item_content_updates_by_id_at_both_levels() {
        let mut draft = ProductDraft::default();
        let field_id = draft.add_field(FieldKind::List);
        let item_id = draft.add_list_item(&field_id).unwrap();
        let sub_id = draft.add_sublist_item(&field_id, &item_id).unwrap();

        assert!(draft.update_list_item_content(&field_id, &item_id, Language::En, "Size: 10cm"));
        assert!(draft.update_list_item_content(&field_id, &sub_id, Language::En, "Depth: 2cm"));

        let field = draft.fields.iter().find(|f| f.id == field_id).unwrap();
        let items = field.items.as_ref().unwrap();
        let item = items.iter().find(|i| i.id == item_id).unwrap();
        assert_eq!(item.content.en, "Size: 10cm");
        assert_eq!(item.sublist.as_ref().unwrap()[0].content.en, "Depth: 2cm");
    }

    #[test]
    fn json_shaped_text_stays_text() {
        let mut draft = ProductDraft::default();
        let field_id = draft.add_field(FieldKind::List);
        let item_id = draft.add_list_item(&field_id).unwrap();

        let tricky = r#"[{"id":"x","content":"gotcha"}]"#;
        assert!(draft.update_list_item_content(&field_id, &item_id, Language::En, tricky));

        let field = draft.fields.iter().find(|f| f.id == field_id).unwrap();
        let item = &field.items.as_ref().unwrap().iter().find(|i| i.id == item_id).unwrap();
        assert_eq!(item.content.en, tricky);
        assert!(item.sublist.is_none());
    }

    #[test]
    fn structural_replacement_is_its_own_operation() {
        let mut draft = ProductDraft::default();
        let field_id = draft.add_field(FieldKind::List);
        let item_id = draft.add_list_item(&field_id).unwrap();

        let replacement = vec![ListItem {
            id: "r1".to_string(),
            content: LocalizedText::new("Глибина", "Depth"),
            sublist: None,
        }];
        assert!(draft.replace_list_item_structure(&field_id, &item_id, replacement));

        let field = draft.fields.iter().find(|f| f.id == field_id).unwrap();
        let item = field.items.as_ref().unwrap().iter().find(|i| i.id == item_id).unwrap();
        assert_eq!(item.sublist.as_ref().unwrap()[0].content.en, "Depth");

        // clearing the structure drops the sublist entirely
        assert!(draft.replace_list_item_structure(&field_id, &item_id, Vec::new()));
        let field = draft.fields.iter().find(|f| f.id == field_id).unwrap();
        let item = field.items.as_ref().unwrap().iter().find(|i| i.id == item_id).unwrap();
        assert!(item.sublist.is_none());
    }

    #[test]
    fn missing_targets_are_reported_not_panicked() {
        let mut draft = ProductDraft::default();
        assert_eq!(draft.add_list_item("nope"), None);
        assert_eq!(draft.add_sublist_item("nope", "nope"), None);
        assert!(!draft.update_list_item_content("nope", "nope", Language::Uk, "x"));

        let field_id = draft.add_field(FieldKind::List);
        assert_eq!(draft.add_sublist_item(&field_id, "nope"), None);
    }

    #[test]
    fn reorder_swaps_neighbours_and_ignores_boundaries() {
        let mut draft = ProductDraft::default();
        let order: Vec<String> = draft.fields.iter().map(|f| f.id.clone()).collect();

        draft.reorder_field(0, MoveDirection::Up);
        assert_eq!(draft.fields[0].id, order[0]);

        draft.reorder_field(2, MoveDirection::Down);
        assert_eq!(draft.fields[2].id, order[2]);

        draft.reorder_field(1, MoveDirection::Up);
        assert_eq!(draft.fields[0].id, order[1]);
        assert_eq!(draft.fields[1].id, order[0]);

        draft.reorder_field(10, MoveDirection::Down);
        assert_eq!(draft.fields.len(), 3);
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut draft = ProductDraft::default();
        let name_id = draft.fields[0].id.clone();
        draft.set_field_value(&name_id, Language::En, "Mug");
        draft.set_image_at(0, "data:image/png;base64,AA").unwrap();
        draft.set_selected_product_type_id(Some("pt-1".to_string()));
        draft.set_active_language(Language::En);

        let restored = ProductDraft::restore(draft.snapshot());
        assert_eq!(restored, draft);
    }
}
