use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: String,
) -> impl IntoView {
    let has_subtitle = !subtitle.is_empty();
    view! {
        <div class="page-header">
            <h2 class="page-header-title">{title}</h2>
            <Show when=move || has_subtitle>
                <p class="page-header-subtitle">{subtitle.clone()}</p>
            </Show>
        </div>
    }
}
