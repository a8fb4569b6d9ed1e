//! Rendering of the draft fields into the HTML body stored with the
//! product. Markup mirrors what the storefront expects: names as headings,
//! titles and general info as spans, list fields as nested `<ul>`.

use contracts::domain::draft::{FieldKind, InputField, ListItem};
use contracts::shared::localized::{Language, LocalizedText};

/// Renders the draft fields for one language, in display order, separated
/// by line breaks.
pub fn render_product_html(fields: &[InputField], language: Language) -> String {
    fields
        .iter()
        .map(|field| match field.kind {
            FieldKind::ProductName => {
                format!("<strong><h1>{}</h1></strong>", field.value.get(language))
            }
            FieldKind::ProductTitle => {
                format!("<strong><span>{}</span></strong>", field.value.get(language))
            }
            FieldKind::GeneralInfo => format!("<span>{}</span>", field.value.get(language)),
            FieldKind::List => field
                .items
                .as_deref()
                .map(|items| render_list(items, language))
                .unwrap_or_default(),
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Both language renderings, as submitted with the create request.
pub fn render_html_content(fields: &[InputField]) -> LocalizedText {
    LocalizedText {
        uk: render_product_html(fields, Language::Uk),
        en: render_product_html(fields, Language::En),
    }
}

fn render_list(items: &[ListItem], language: Language) -> String {
    let body: String = items
        .iter()
        .map(|item| {
            let nested = item
                .sublist
                .as_deref()
                .filter(|sub| !sub.is_empty())
                .map(|sub| render_list(sub, language))
                .unwrap_or_default();
            format!("<li>{}{nested}</li>", item.content.get(language))
        })
        .collect();
    format!("<ul>{body}</ul>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind, uk: &str, en: &str) -> InputField {
        InputField {
            id: "f".to_string(),
            kind,
            label: kind.default_label().to_string(),
            value: LocalizedText::new(uk, en),
            items: None,
        }
    }

    #[test]
    fn each_kind_gets_its_markup() {
        let fields = vec![
            field(FieldKind::ProductName, "Кухоль", "Mug"),
            field(FieldKind::ProductTitle, "Керамічний", "Ceramic"),
            field(FieldKind::GeneralInfo, "Опис", "Details"),
        ];

        let html = render_product_html(&fields, Language::En);
        assert_eq!(
            html,
            "<strong><h1>Mug</h1></strong><br>\
             <strong><span>Ceramic</span></strong><br>\
             <span>Details</span>"
        );
    }

    #[test]
    fn lists_render_nested_markup() {
        let mut list = field(FieldKind::List, "", "");
        list.items = Some(vec![ListItem {
            id: "i1".to_string(),
            content: LocalizedText::new("Розмір", "Size"),
            sublist: Some(vec![ListItem {
                id: "s1".to_string(),
                content: LocalizedText::new("10см", "10cm"),
                sublist: None,
            }]),
        }]);

        let html = render_product_html(&[list], Language::En);
        assert_eq!(html, "<ul><li>Size<ul><li>10cm</li></ul></li></ul>");
    }

    #[test]
    fn both_languages_are_rendered_independently() {
        let fields = vec![field(FieldKind::ProductName, "Кухоль", "Mug")];
        let content = render_html_content(&fields);
        assert!(content.uk.contains("Кухоль"));
        assert!(content.en.contains("Mug"));
        assert!(!content.en.contains("Кухоль"));
    }

    #[test]
    fn empty_sublists_add_no_markup() {
        let mut list = field(FieldKind::List, "", "");
        list.items = Some(vec![ListItem {
            id: "i1".to_string(),
            content: LocalizedText::new("Розмір", "Size"),
            sublist: Some(vec![]),
        }]);

        let html = render_product_html(&[list], Language::En);
        assert_eq!(html, "<ul><li>Size</li></ul>");
    }
}
