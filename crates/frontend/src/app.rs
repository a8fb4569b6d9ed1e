use std::sync::Arc;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::transport::FetchTransport;
use crate::shared::api::{api_base, ApiClient};
use crate::shared::state::DraftStore;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::storage::{CookieTokenStore, TokenStore};

#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    let tokens: Arc<dyn TokenStore + Send + Sync> = Arc::new(CookieTokenStore);
    provide_context(ApiClient::new(api_base(), FetchTransport, tokens));
    provide_context(AppGlobalContext::new());
    provide_context(DraftStore::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
