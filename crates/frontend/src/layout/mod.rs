pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use global_context::AppGlobalContext;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Application shell:
///
/// ```text
/// +------------------------------------------+
/// |                TopHeader                 |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
#[allow(non_snake_case)]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Show when=move || ctx.sidebar_open.get()>
                    <Sidebar />
                </Show>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
