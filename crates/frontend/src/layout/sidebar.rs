use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Page};

#[component]
#[allow(non_snake_case)]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <nav class="sidebar">
            {Page::ALL
                .iter()
                .map(|page| {
                    let page = *page;
                    view! {
                        <button
                            class="sidebar-item"
                            class:active=move || ctx.page.get() == page
                            on:click=move |_| ctx.navigate(page)
                        >
                            {page.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
