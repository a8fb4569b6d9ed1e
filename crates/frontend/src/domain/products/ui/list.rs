use contracts::domain::products::{ProductModel, ProductNames, UpdateProductRequest};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::products::api;
use crate::shared::api::ApiClient;
use crate::shared::components::PageHeader;

const PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
struct ProductRow {
    id: String,
    name: String,
    type_name: String,
    image_count: usize,
    main_image: String,
    created_at: String,
}

impl From<ProductModel> for ProductRow {
    fn from(product: ProductModel) -> Self {
        let name = if product.name.is_empty() {
            product
                .product_names
                .uk
                .first()
                .or_else(|| product.product_names.en.first())
                .cloned()
                .unwrap_or_else(|| "-".to_string())
        } else {
            product.name.clone()
        };
        let main_image = product
            .images
            .iter()
            .find(|image| image.is_main)
            .or_else(|| product.images.first())
            .map(|image| image.image_url.clone())
            .unwrap_or_default();

        Self {
            id: product.id,
            name,
            type_name: product.product_type.name,
            image_count: product.images.len(),
            main_image,
            created_at: product.created_at.format("%d.%m.%Y %H:%M").to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductListPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (items, set_items) = signal(Vec::<ProductRow>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (page, set_page) = signal(1u32);
    let (total, set_total) = signal(0u64);

    let fetch_client = client.clone();
    let fetch = move |page_number: u32| {
        let client = fetch_client.clone();
        set_loading.set(true);
        spawn_local(async move {
            let response = api::fetch_products(&client, page_number, PAGE_SIZE).await;
            if response.success {
                set_total.set(
                    response
                        .metadata
                        .as_ref()
                        .and_then(|metadata| metadata.total)
                        .unwrap_or(response.data.len() as u64),
                );
                set_items.set(response.data.into_iter().map(Into::into).collect());
                set_error.set(None);
            } else {
                set_error.set(Some(
                    response
                        .error
                        .unwrap_or_else(|| "Failed to load products".to_string()),
                ));
            }
            set_loading.set(false);
        });
    };

    {
        let fetch = fetch.clone();
        Effect::new(move |_| fetch(page.get()));
    }

    let delete_client = client.clone();
    let delete_fetch = fetch.clone();
    let on_delete = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message(&format!("Delete product \"{name}\"?"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let client = delete_client.clone();
        let fetch = delete_fetch.clone();
        spawn_local(async move {
            let response = api::delete_product(&client, &id).await;
            if response.success {
                fetch(page.get_untracked());
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
            .prompt_with_message_and_default("New Ukrainian product name:", &current)
            .ok()
            .flatten()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        let Some(new_name) = entered else {
            return;
        };
        let client = rename_client.clone();
        let fetch = rename_fetch.clone();
        spawn_local(async move {
            let request = UpdateProductRequest {
                product_names: Some(ProductNames {
                    uk: vec![new_name],
                    en: vec![],
                }),
                ..Default::default()
            };
            let response = api::update_product(&client, &id, &request).await;
            if response.success {
                fetch(page.get_untracked());
            } else {
                set_error.set(response.error);
            }
        });
    };

    let total_pages = move || {
        let total = total.get();
        (total.div_ceil(PAGE_SIZE as u64)).max(1) as u32
    };

    view! {
        <div class="page product-list-page">
            <PageHeader title="Products" subtitle="Published catalog products" />

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading…"</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Images"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row| {
                            let delete_id = row.id.clone();
                            let delete_name = row.name.clone();
                            let rename_id = row.id.clone();
                            let rename_name = row.name.clone();
                            let on_delete = on_delete.clone();
                            let on_rename = on_rename.clone();
                            view! {
                                <tr>
                                    <td>
                                        <Show when={
                                            let has_image = !row.main_image.is_empty();
                                            move || has_image
                                        }>
                                            <img class="row-thumbnail" src=row.main_image.clone() />
                                        </Show>
                                    </td>
                                    <td>{row.name.clone()}</td>
                                    <td>{row.type_name.clone()}</td>
                                    <td>{row.image_count}</td>
                                    <td>{row.created_at.clone()}</td>
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

            <div class="pagination">
                <button
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Prev"
                </button>
                <span>{move || format!("Page {} of {}", page.get(), total_pages())}</span>
                <button
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
