use leptos::prelude::*;

use crate::domain::product_types::ui::ProductTypesPage;
use crate::domain::products::ui::{ProductListPage, ProductWizardPage};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::account::AccountPage;
use crate::system::pages::login::LoginPage;

#[component]
#[allow(non_snake_case)]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <Shell>
            {move || match ctx.page.get() {
                Page::Products => view! { <ProductListPage /> }.into_any(),
                Page::NewProduct => view! { <ProductWizardPage /> }.into_any(),
                Page::ProductTypes => view! { <ProductTypesPage /> }.into_any(),
                Page::Account => view! { <AccountPage /> }.into_any(),
            }}
        </Shell>
    }
}

/// Auth gate: everything behind it requires a live session.
#[component]
#[allow(non_snake_case)]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
