use contracts::domain::products::ProductType;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::product_types::api;
use crate::shared::api::ApiClient;
use crate::shared::state::DraftStore;

#[component]
#[allow(non_snake_case)]
pub fn CategoryStep() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let (types, set_types) = signal(Vec::<ProductType>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let load_client = client.clone();
    Effect::new(move |_| {
        let client = load_client.clone();
        spawn_local(async move {
            let response = api::fetch_product_types(&client).await;
            if response.success {
                set_types.set(response.data);
                set_error.set(None);
            } else {
                set_error.set(Some(response.error.unwrap_or_else(|| {
                    "Failed to load product types".to_string()
                })));
            }
        });
    });

    view! {
        <div class="wizard-step category-step">
            <h3>"Product Type"</h3>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <div class="type-options">
                <For
                    each=move || types.get()
                    key=|ptype| ptype.id.clone()
                    children=move |ptype| {
                        let selected_id = ptype.id.clone();
                        let click_id = ptype.id.clone();
                        view! {
                            <button
                                class="type-option"
                                class:selected=move || {
                                    draft.with(|d| {
                                        d.selected_product_type_id.as_deref()
                                            == Some(selected_id.as_str())
                                    })
                                }
                                on:click=move |_| draft.update(|d| {
                                    d.set_selected_product_type_id(Some(click_id.clone()));
                                })
                            >
                                {ptype.name.clone()}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
