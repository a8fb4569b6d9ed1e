use contracts::shared::localized::Language;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::products::{api, html, payload};
use crate::shared::api::ApiClient;
use crate::shared::state::storage::clear_draft;
use crate::shared::state::{DraftStore, SessionStorageSlot};
use crate::shared::upload;

/// Final wizard view: renders the persisted draft the way the storefront
/// will show it, and performs the one-shot create on submission.
#[component]
#[allow(non_snake_case)]
pub fn PreviewStep() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let (notice, set_notice) = signal(Option::<(bool, String)>::None);
    let (submitting, set_submitting) = signal(false);

    // The wizard persisted the draft right before switching here; adopt the
    // stored snapshot so a reload of this view keeps the data.
    Effect::new(move |_| {
        if !draft.load(&SessionStorageSlot) {
            log::warn!("no stored draft found, showing live state");
        }
    });

    let rendered = move || draft.with(|d| html::render_product_html(&d.fields, d.active_language));
    let images = move || {
        draft.with(|d| {
            d.images
                .iter()
                .filter(|slot| !slot.is_empty())
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let active_language = move || draft.with(|d| d.active_language);

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        if let Err(message) = draft.with_untracked(payload::validate_draft) {
            set_notice.set(Some((true, message)));
            return;
        }
        set_submitting.set(true);
        let client = submit_client.clone();
        spawn_local(async move {
            let slots = draft.with_untracked(|d| d.images.clone());
            let urls = upload::resolve_image_urls(&slots).await;
            if urls.is_empty() {
                set_notice.set(Some((true, "Image upload failed, please try again".to_string())));
                set_submitting.set(false);
                return;
            }

            match draft.with_untracked(|d| payload::build_create_request(d, &urls)) {
                Ok(request) => {
                    let response = api::create_product(&client, &request).await;
                    if response.success {
                        set_notice.set(Some((false, "Product created successfully".to_string())));
                        draft.reset();
                        clear_draft(&SessionStorageSlot);
                    } else {
                        set_notice.set(Some((
                            true,
                            response
                                .error
                                .unwrap_or_else(|| "Failed to create product".to_string()),
                        )));
                    }
                }
                Err(message) => set_notice.set(Some((true, message))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="wizard-step preview-step">
            <div class="language-switch">
                {Language::ALL
                    .iter()
                    .map(|language| {
                        let language = *language;
                        view! {
                            <button
                                class="language-option"
                                class:active=move || active_language() == language
                                on:click=move |_| draft.update(|d| d.set_active_language(language))
                            >
                                {language.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="preview-images">
                <For
                    each=move || { images().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(index, _)| *index
                    children=|(index, url)| {
                        view! { <img class="preview-image" class:main=index == 0 src=url /> }
                    }
                />
            </div>

            <div class="preview-content" inner_html=rendered></div>

            <Show when=move || notice.get().is_some()>
                <div
                    class="notice"
                    class:error=move || notice.get().map(|(is_error, _)| is_error).unwrap_or(false)
                >
                    {move || notice.get().map(|(_, text)| text).unwrap_or_default()}
                </div>
            </Show>

            <button
                class="create-button"
                disabled=submitting
                on:click=on_submit
            >
                {move || if submitting.get() { "Creating…" } else { "Create Product" }}
            </button>
        </div>
    }
}
