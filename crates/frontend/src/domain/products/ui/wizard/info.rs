use contracts::domain::draft::FieldKind;
use contracts::shared::localized::Language;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::state::{DraftStore, MoveDirection};

const ADDABLE_KINDS: [FieldKind; 4] = [
    FieldKind::ProductName,
    FieldKind::ProductTitle,
    FieldKind::GeneralInfo,
    FieldKind::List,
];

#[component]
#[allow(non_snake_case)]
pub fn InfoStep() -> impl IntoView {
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let (warning, set_warning) = signal(Option::<String>::None);

    let warn = Callback::new(move |message: String| {
        set_warning.set(Some(message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            set_warning.set(None);
        });
    });

    view! {
        <div class="wizard-step info-step">
            <h3>"Product Information"</h3>
            <Show when=move || warning.get().is_some()>
                <div class="warning-toast">{move || warning.get().unwrap_or_default()}</div>
            </Show>
            <For
                each=move || draft.with(|d| d.fields.iter().map(|f| f.id.clone()).collect::<Vec<_>>())
                key=|id| id.clone()
                children=move |field_id| view! { <FieldEditor field_id=field_id on_warn=warn /> }
            />
            <div class="add-field-row">
                {ADDABLE_KINDS
                    .iter()
                    .map(|kind| {
                        let kind = *kind;
                        view! {
                            <button
                                class="add-button"
                                on:click=move |_| draft.update(|d| {
                                    d.add_field(kind);
                                })
                            >
                                {format!("Add {}", kind.default_label())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn FieldEditor(field_id: String, on_warn: Callback<String>) -> impl IntoView {
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let id = StoredValue::new(field_id);

    let field_with = move |f: fn(&contracts::domain::draft::InputField) -> String| {
        draft.with(|d| {
            d.fields
                .iter()
                .find(|field| field.id == id.get_value())
                .map(f)
                .unwrap_or_default()
        })
    };
    let label = move || field_with(|field| field.label.clone());
    let kind = move || {
        draft.with(|d| {
            d.fields
                .iter()
                .find(|field| field.id == id.get_value())
                .map(|field| field.kind)
        })
    };
    let value_uk = move || field_with(|field| field.value.uk.clone());
    let value_en = move || field_with(|field| field.value.en.clone());

    let position = move || draft.with(|d| d.fields.iter().position(|f| f.id == id.get_value()));
    let field_count = move || draft.with(|d| d.fields.len());

    let move_up = move |_| {
        draft.update(|d| {
            if let Some(index) = d.fields.iter().position(|f| f.id == id.get_value()) {
                d.reorder_field(index, MoveDirection::Up);
            }
        })
    };
    let move_down = move |_| {
        draft.update(|d| {
            if let Some(index) = d.fields.iter().position(|f| f.id == id.get_value()) {
                d.reorder_field(index, MoveDirection::Down);
            }
        })
    };
    let remove = move |_| {
        if let Some(Err(e)) = draft.try_update(|d| d.remove_field(&id.get_value())) {
            on_warn.run(e.to_string());
        }
    };

    view! {
        <div class="field-editor">
            <div class="field-toolbar">
                <span class="field-label">{label}</span>
                <button
                    class="arrow-button"
                    disabled=move || position() == Some(0)
                    on:click=move_up
                    title="Move up"
                >
                    "↑"
                </button>
                <button
                    class="arrow-button"
                    disabled=move || position().is_some_and(|p| p + 1 == field_count())
                    on:click=move_down
                    title="Move down"
                >
                    "↓"
                </button>
                <button class="remove-button" on:click=remove title="Remove field">
                    "✕"
                </button>
            </div>
            <Show
                when=move || kind() == Some(FieldKind::List)
                fallback=move || {
                    view! {
                        <div class="field-values">
                            <input
                                type="text"
                                placeholder="Українською"
                                prop:value=value_uk
                                on:input=move |ev| draft.update(|d| {
                                    d.set_field_value(&id.get_value(), Language::Uk, &event_target_value(&ev));
                                })
                            />
                            <input
                                type="text"
                                placeholder="In English"
                                prop:value=value_en
                                on:input=move |ev| draft.update(|d| {
                                    d.set_field_value(&id.get_value(), Language::En, &event_target_value(&ev));
                                })
                            />
                        </div>
                    }
                }
            >
                <ListEditor field_id=id.get_value() />
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ListEditor(field_id: String) -> impl IntoView {
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let id = StoredValue::new(field_id);

    let item_ids = move || {
        draft.with(|d| {
            d.fields
                .iter()
                .find(|f| f.id == id.get_value())
                .and_then(|f| f.items.as_ref())
                .map(|items| items.iter().map(|item| item.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="list-editor">
            <For
                each=item_ids
                key=|item_id| item_id.clone()
                children=move |item_id| {
                    view! { <ListItemEditor field_id=id.get_value() item_id=item_id nested=false /> }
                }
            />
            <button
                class="add-button"
                on:click=move |_| draft.update(|d| {
                    d.add_list_item(&id.get_value());
                })
            >
                "Add list item"
            </button>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ListItemEditor(field_id: String, item_id: String, nested: bool) -> AnyView {
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let fid = StoredValue::new(field_id);
    let iid = StoredValue::new(item_id);

    let content = move |language: Language| {
        draft.with(|d| {
            d.find_list_item(&fid.get_value(), &iid.get_value())
                .map(|item| item.content.get(language).to_string())
                .unwrap_or_default()
        })
    };
    let sublist_ids = move || {
        draft.with(|d| {
            d.find_list_item(&fid.get_value(), &iid.get_value())
                .and_then(|item| item.sublist.as_ref())
                .map(|sub| sub.iter().map(|item| item.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    let placeholder = if nested { "Sublist Item" } else { "List Item" };

    view! {
        <div class="list-item" class:nested=nested>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || content(Language::Uk)
                on:input=move |ev| draft.update(|d| {
                    d.update_list_item_content(
                        &fid.get_value(),
                        &iid.get_value(),
                        Language::Uk,
                        &event_target_value(&ev),
                    );
                })
            />
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || content(Language::En)
                on:input=move |ev| draft.update(|d| {
                    d.update_list_item_content(
                        &fid.get_value(),
                        &iid.get_value(),
                        Language::En,
                        &event_target_value(&ev),
                    );
                })
            />
            <Show when=move || !nested>
                <button
                    class="add-button"
                    on:click=move |_| draft.update(|d| {
                        d.add_sublist_item(&fid.get_value(), &iid.get_value());
                    })
                >
                    "Add sublist item"
                </button>
                <Show when=move || !sublist_ids().is_empty()>
                    <button
                        class="remove-button"
                        on:click=move |_| draft.update(|d| {
                            d.replace_list_item_structure(&fid.get_value(), &iid.get_value(), Vec::new());
                        })
                    >
                        "Clear sublist"
                    </button>
                </Show>
            </Show>
            <For
                each=sublist_ids
                key=|sub_id| sub_id.clone()
                children=move |sub_id| {
                    view! { <ListItemEditor field_id=fid.get_value() item_id=sub_id nested=true /> }
                }
            />
        </div>
    }
    .into_any()
}
