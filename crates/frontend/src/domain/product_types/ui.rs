use contracts::domain::products::ProductType;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::ApiClient;
use crate::shared::components::PageHeader;

use super::api;

#[component]
#[allow(non_snake_case)]
pub fn ProductTypesPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (types, set_types) = signal(Vec::<ProductType>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (new_name, set_new_name) = signal(String::new());

    let fetch_client = client.clone();
    let fetch = move || {
        let client = fetch_client.clone();
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
    };

    {
        let fetch = fetch.clone();
        Effect::new(move |_| fetch());
    }

    let add_client = client.clone();
    let add_fetch = fetch.clone();
    let on_add = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            set_error.set(Some("Product type name cannot be empty".to_string()));
            return;
        }
        let client = add_client.clone();
        let fetch = add_fetch.clone();
        spawn_local(async move {
            let response = api::create_product_type(&client, &name).await;
            if response.success {
                set_new_name.set(String::new());
                fetch();
            } else {
                set_error.set(response.error);
            }
        });
    };

    let rename_client = client.clone();
    let rename_fetch = fetch.clone();
    let on_rename = move |id: String, current: String| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let entered = window
            .prompt_with_message_and_default("New product type name:", &current)
            .ok()
            .flatten()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        let Some(name) = entered else {
            return;
        };
        let client = rename_client.clone();
        let fetch = rename_fetch.clone();
        spawn_local(async move {
            let response = api::update_product_type(&client, &id, &name).await;
            if response.success {
                fetch();
            } else {
                set_error.set(response.error);
            }
        });
    };

    let delete_client = client.clone();
    let delete_fetch = fetch.clone();
    let on_delete = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message(&format!("Delete product type \"{name}\"?"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let client = delete_client.clone();
        let fetch = delete_fetch.clone();
        spawn_local(async move {
            let response = api::delete_product_type(&client, &id).await;
            if response.success {
                fetch();
            } else {
                set_error.set(response.error);
            }
        });
    };

    view! {
        <div class="page product-types-page">
            <PageHeader title="Product Types" subtitle="Categories the wizard selects from" />

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="add-type-row">
                <input
                    type="text"
                    placeholder="New product type"
                    prop:value=new_name
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button class="add-button" on:click=on_add>"Add"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Created"</th>
                        <th>"Updated"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || types.get()
                        key=|ptype| ptype.id.clone()
                        children=move |ptype| {
                            let rename_id = ptype.id.clone();
                            let rename_name = ptype.name.clone();
                            let delete_id = ptype.id.clone();
                            let delete_name = ptype.name.clone();
                            let on_rename = on_rename.clone();
                            let on_delete = on_delete.clone();
                            view! {
                                <tr>
                                    <td>{ptype.name.clone()}</td>
                                    <td>{ptype.created_at.format("%d.%m.%Y").to_string()}</td>
                                    <td>{ptype.updated_at.format("%d.%m.%Y").to_string()}</td>
                                    <td class="row-actions">
                                        <button on:click=move |_| on_rename(
                                            rename_id.clone(),
                                            rename_name.clone(),
                                        )>"Rename"</button>
                                        <button
                                            class="danger"
                                            on:click=move |_| on_delete(
                                                delete_id.clone(),
                                                delete_name.clone(),
                                            )
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
