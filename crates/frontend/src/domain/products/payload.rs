//! Assembly and client-side validation of the one-shot create request
//! built from the draft. Validation failures are plain messages for the
//! form, never panics.

use contracts::domain::draft::FieldKind;
use contracts::domain::products::{CreateProductRequest, NewProductImage, ProductNames};
use contracts::shared::localized::Language;

use crate::shared::state::ProductDraft;

use super::html;

/// Pre-submission check of the draft as a whole.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), String> {
    if draft.selected_product_type_id.is_none() {
        return Err("Please select a product type".to_string());
    }
    if !draft.images.iter().any(|slot| !slot.is_empty()) {
        return Err("Please add at least one product image".to_string());
    }
    let has_name = draft
        .fields
        .iter()
        .any(|f| f.kind == FieldKind::ProductName && !f.value.is_blank());
    if !has_name {
        return Err("Please add at least one product name".to_string());
    }
    Ok(())
}

/// Builds the create payload from the draft and the already-hosted image
/// URLs. The first image is the main one.
pub fn build_create_request(
    draft: &ProductDraft,
    image_urls: &[String],
) -> Result<CreateProductRequest, String> {
    let product_type_id = draft
        .selected_product_type_id
        .clone()
        .ok_or_else(|| "Please select a product type".to_string())?;

    let product_names = ProductNames {
        uk: names_for(draft, Language::Uk),
        en: names_for(draft, Language::En),
    };
    if product_names.uk.is_empty() && product_names.en.is_empty() {
        return Err("Please add at least one product name in either Ukrainian or English".to_string());
    }

    let images: Vec<NewProductImage> = image_urls
        .iter()
        .filter(|url| !url.is_empty())
        .enumerate()
        .map(|(index, url)| NewProductImage {
            image_url: url.clone(),
            is_main: index == 0,
        })
        .collect();
    if images.is_empty() {
        return Err("Please add at least one product image".to_string());
    }

    Ok(CreateProductRequest {
        product_type_id,
        product_names,
        images,
        html_content: html::render_html_content(&draft.fields),
    })
}

fn names_for(draft: &ProductDraft, language: Language) -> Vec<String> {
    draft
        .fields
        .iter()
        .filter(|f| f.kind == FieldKind::ProductName)
        .map(|f| f.value.get(language).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_draft() -> ProductDraft {
        let mut draft = ProductDraft::default();
        let name_id = draft.fields[0].id.clone();
        draft.set_field_value(&name_id, Language::Uk, "  Кухоль  ");
        draft.set_field_value(&name_id, Language::En, "Mug");
        draft.set_image_at(0, "data:image/png;base64,AA").unwrap();
        draft.set_selected_product_type_id(Some("pt-1".to_string()));
        draft
    }

    #[test]
    fn a_complete_draft_validates() {
        assert_eq!(validate_draft(&ready_draft()), Ok(()));
    }

    #[test]
    fn each_missing_piece_gets_its_own_message() {
        let mut no_type = ready_draft();
        no_type.set_selected_product_type_id(None);
        assert_eq!(
            validate_draft(&no_type),
            Err("Please select a product type".to_string())
        );

        let mut no_image = ready_draft();
        no_image.images = vec![String::new(); 9];
        assert_eq!(
            validate_draft(&no_image),
            Err("Please add at least one product image".to_string())
        );

        let mut no_name = ready_draft();
        let name_id = no_name.fields[0].id.clone();
        no_name.set_field_value(&name_id, Language::Uk, " ");
        no_name.set_field_value(&name_id, Language::En, "");
        assert_eq!(
            validate_draft(&no_name),
            Err("Please add at least one product name".to_string())
        );
    }

    #[test]
    fn request_carries_trimmed_names_and_main_image() {
        let draft = ready_draft();
        let urls = vec![
            "https://img.example/1.png".to_string(),
            "https://img.example/2.png".to_string(),
        ];

        let request = build_create_request(&draft, &urls).unwrap();
        assert_eq!(request.product_type_id, "pt-1");
        assert_eq!(request.product_names.uk, vec!["Кухоль"]);
        assert_eq!(request.product_names.en, vec!["Mug"]);
        assert!(request.images[0].is_main);
        assert!(!request.images[1].is_main);
        assert!(request.html_content.en.contains("Mug"));
    }

    #[test]
    fn one_language_is_enough_for_names() {
        let mut draft = ready_draft();
        let name_id = draft.fields[0].id.clone();
        draft.set_field_value(&name_id, Language::En, "");

        let request =
            build_create_request(&draft, &["https://img.example/1.png".to_string()]).unwrap();
        assert_eq!(request.product_names.uk, vec!["Кухоль"]);
        assert!(request.product_names.en.is_empty());
    }

    #[test]
    fn empty_url_list_is_rejected() {
        let draft = ready_draft();
        assert!(build_create_request(&draft, &[]).is_err());
        assert!(build_create_request(&draft, &[String::new()]).is_err());
    }
}
