use leptos::prelude::*;

use crate::shared::api::cache::now_ms;
use crate::shared::api::ApiClient;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::session;

use super::global_context::AppGlobalContext;

#[component]
#[allow(non_snake_case)]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (auth_state, set_auth_state) = use_auth();

    // Once a minute: enforce the idle timeout and refresh the countdown.
    let (now, set_now) = signal(now_ms());
    {
        let watch_client = client.clone();
        let interval = gloo_timers::callback::Interval::new(60_000, move || {
            let current = now_ms();
            if session::is_expired(session::last_activity_ms(), current)
                && watch_client.tokens().get().is_some()
            {
                do_logout(&watch_client, set_auth_state);
            }
            set_now.set(current);
        });
        interval.forget();
    }

    let session_minutes = move || {
        let remaining = session::remaining_ms(session::last_activity_ms(), now.get());
        (remaining / 60_000.0).ceil() as u32
    };
    let user_email = move || {
        auth_state
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };

    let logout_client = client.clone();

    view! {
        <header class="top-header">
            <button
                class="sidebar-toggle"
                title="Toggle sidebar"
                on:click=move |_| ctx.toggle_sidebar()
            >
                "☰"
            </button>
            <span class="app-title">"Catalog Admin"</span>
            <div class="top-header-right">
                <span class="session-info" title="Minutes until automatic logout">
                    {move || format!("{} min", session_minutes())}
                </span>
                <span class="user-email">{user_email}</span>
                <button
                    class="logout-button"
                    on:click=move |_| do_logout(&logout_client, set_auth_state)
                >
                    "Log out"
                </button>
            </div>
        </header>
    }
}
