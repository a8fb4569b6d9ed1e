use serde::{Deserialize, Serialize};

use crate::shared::localized::{Language, LocalizedText};

/// Browser-storage key the draft snapshot is persisted under.
pub const DRAFT_STORAGE_KEY: &str = "productData";

/// Number of empty image slots a fresh draft starts with.
pub const DEFAULT_IMAGE_SLOTS: usize = 9;

/// Kind of an editable field on the product draft. Wire names match the
/// persisted snapshot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "geninfo")]
    GeneralInfo,
    #[serde(rename = "productName")]
    ProductName,
    #[serde(rename = "productTitle")]
    ProductTitle,
    #[serde(rename = "list")]
    List,
}

impl FieldKind {
    pub fn default_label(self) -> &'static str {
        match self {
            FieldKind::GeneralInfo => "General Information",
            FieldKind::ProductName => "Product Name",
            FieldKind::ProductTitle => "Product Title",
            FieldKind::List => "List",
        }
    }
}

/// One entry of a list field. `sublist` allows unbounded nesting; the
/// editor only ever produces one level below the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub content: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublist: Option<Vec<ListItem>>,
}

impl ListItem {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: LocalizedText::default(),
            sublist: None,
        }
    }
}

/// An editable field of the product draft. Insertion order is display
/// order. `items` is present only for [`FieldKind::List`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub value: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
}

/// Plain snapshot of the whole draft, as persisted to browser storage.
///
/// Snapshots written before the localization rework may carry plain-string
/// field values; [`LocalizedText`] upgrades those on read. Missing keys fall
/// back to the defaults of a fresh draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    #[serde(default = "default_image_slots")]
    pub product_images: Vec<String>,
    #[serde(default)]
    pub product_info: Vec<InputField>,
    #[serde(default)]
    pub active_language: Language,
    #[serde(default)]
    pub selected_product_type_id: Option<String>,
}

fn default_image_slots() -> Vec<String> {
    vec![String::new(); DEFAULT_IMAGE_SLOTS]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> DraftSnapshot {
        DraftSnapshot {
            product_images: vec!["data:image/png;base64,AAA".to_string(), String::new()],
            product_info: vec![InputField {
                id: "f1".to_string(),
                kind: FieldKind::ProductName,
                label: "Product Name".to_string(),
                value: LocalizedText::new("Кухоль", "Mug"),
                items: None,
            }],
            active_language: Language::En,
            selected_product_type_id: Some("pt-7".to_string()),
        }
    }

    #[test]
    fn snapshot_uses_wire_key_names() {
        let json = serde_json::to_value(sample_snapshot()).unwrap();
        assert!(json.get("productImages").is_some());
        assert!(json.get("productInfo").is_some());
        assert_eq!(json["activeLanguage"], "en");
        assert_eq!(json["selectedProductTypeId"], "pt-7");
        assert_eq!(json["productInfo"][0]["type"], "productName");
    }

    #[test]
    fn snapshot_round_trips() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DraftSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn missing_keys_fall_back_to_fresh_defaults() {
        let back: DraftSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(back.product_images.len(), DEFAULT_IMAGE_SLOTS);
        assert!(back.product_info.is_empty());
        assert_eq!(back.active_language, Language::Uk);
        assert_eq!(back.selected_product_type_id, None);
    }

    #[test]
    fn legacy_string_values_upgrade_on_read() {
        let json = r#"{
            "productImages": [],
            "productInfo": [
                {"id": "1", "type": "productName", "label": "Product Name", "value": "Стара назва"}
            ],
            "activeLanguage": "uk",
            "selectedProductTypeId": null
        }"#;
        let back: DraftSnapshot = serde_json::from_str(json).unwrap();
        let field = &back.product_info[0];
        assert_eq!(field.value.uk, "Стара назва");
        assert_eq!(field.value.en, "");
    }

    #[test]
    fn list_fields_nest_one_level() {
        let json = r#"{
            "productInfo": [{
                "id": "1", "type": "list", "label": "List",
                "value": {"uk": "", "en": ""},
                "items": [{
                    "id": "i1",
                    "content": {"uk": "Розмір", "en": "Size"},
                    "sublist": [{"id": "s1", "content": {"uk": "10см", "en": "10cm"}}]
                }]
            }]
        }"#;
        let back: DraftSnapshot = serde_json::from_str(json).unwrap();
        let items = back.product_info[0].items.as_ref().unwrap();
        let sub = items[0].sublist.as_ref().unwrap();
        assert_eq!(sub[0].content.en, "10cm");
    }
}
