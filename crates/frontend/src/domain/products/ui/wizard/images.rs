use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::state::DraftStore;

#[component]
#[allow(non_snake_case)]
pub fn ImagesStep() -> impl IntoView {
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let slot_count = move || draft.with(|d| d.images.len());

    view! {
        <div class="wizard-step images-step">
            <h3>"Product Images"</h3>
            <p class="hint">"The first slot is the main image."</p>
            <div class="image-grid">
                <For
                    each=move || { (0..slot_count()).collect::<Vec<_>>() }
                    key=|index| *index
                    children=move |index| view! { <ImageSlot index=index /> }
                />
            </div>
            <button
                class="add-button"
                on:click=move |_| draft.update(|d| d.add_image_slots(3))
            >
                "Add more slots"
            </button>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ImageSlot(index: usize) -> impl IntoView {
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let value = move || draft.with(|d| d.images.get(index).cloned().unwrap_or_default());

    let on_pick = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        read_file_as_data_url(file, move |data_url| {
            if let Some(Err(e)) = draft.try_update(|d| d.set_image_at(index, data_url)) {
                log::warn!("image slot write rejected: {e}");
            }
        });
    };

    view! {
        <div class="image-slot" class:main=move || index == 0>
            <Show when=move || !value().is_empty()>
                <img class="image-preview" src=value />
            </Show>
            <input type="file" accept="image/*" on:change=on_pick />
        </div>
    }
}

/// Reads the picked file into a data-URL and hands it to `on_done`.
fn read_file_as_data_url(file: web_sys::File, on_done: impl FnOnce(String) + 'static) {
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };
    let handle = reader.clone();
    let callback = wasm_bindgen::closure::Closure::once(move |_event: web_sys::ProgressEvent| {
        if let Ok(result) = handle.result() {
            if let Some(data_url) = result.as_string() {
                on_done(data_url);
            }
        }
    });
    reader.set_onload(Some(callback.as_ref().unchecked_ref()));
    // the closure must outlive this scope; it fires at most once
    callback.forget();
    if reader.read_as_data_url(&file).is_err() {
        log::warn!("failed to read the selected file");
    }
}
