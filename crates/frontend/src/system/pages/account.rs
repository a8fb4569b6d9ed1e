use contracts::system::auth::PasswordChangeRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiClient;
use crate::shared::components::PageHeader;
use crate::system::auth::{api, context::use_auth};

#[component]
#[allow(non_snake_case)]
pub fn AccountPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (auth_state, _) = use_auth();

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (notice, set_notice) = signal(Option::<(bool, String)>::None);
    let (busy, set_busy) = signal(false);

    let username = move || {
        auth_state
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let email = move || {
        auth_state
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };
    let role = move || {
        auth_state
            .get()
            .user
            .map(|user| user.role.as_str())
            .unwrap_or("")
    };

    let change_client = client.clone();
    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_password_value = new_password.get_untracked();
        if new_password_value != confirm_password.get_untracked() {
            set_notice.set(Some((true, "Passwords do not match".to_string())));
            return;
        }
        let request = PasswordChangeRequest {
            current_password: current_password.get_untracked(),
            new_password: new_password_value,
            confirm_password: confirm_password.get_untracked(),
        };
        let client = change_client.clone();

        set_busy.set(true);
        spawn_local(async move {
            let response = api::change_password(&client, &request).await;
            if response.success {
                set_notice.set(Some((
                    false,
                    if response.data.message.is_empty() {
                        "Password changed".to_string()
                    } else {
                        response.data.message
                    },
                )));
                set_current_password.set(String::new());
                set_new_password.set(String::new());
                set_confirm_password.set(String::new());
            } else {
                set_notice.set(Some((
                    true,
                    response
                        .error
                        .unwrap_or_else(|| "Failed to change password".to_string()),
                )));
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page account-page">
            <PageHeader title="Account" />

            <div class="profile-card">
                <div class="profile-row">
                    <span class="profile-label">"Username"</span>
                    <span>{username}</span>
                </div>
                <div class="profile-row">
                    <span class="profile-label">"Email"</span>
                    <span>{email}</span>
                </div>
                <div class="profile-row">
                    <span class="profile-label">"Role"</span>
                    <span>{role}</span>
                </div>
            </div>

            <h3>"Change password"</h3>
            <Show when=move || notice.get().is_some()>
                <div
                    class="notice"
                    class:error=move || notice.get().map(|(is_error, _)| is_error).unwrap_or(false)
                >
                    {move || notice.get().map(|(_, text)| text).unwrap_or_default()}
                </div>
            </Show>

            <form class="password-form" on:submit=on_change_password>
                <div class="form-group">
                    <label for="current-password">"Current password"</label>
                    <input
                        type="password"
                        id="current-password"
                        prop:value=current_password
                        on:input=move |ev| set_current_password.set(event_target_value(&ev))
                        required
                        disabled=busy
                    />
                </div>
                <div class="form-group">
                    <label for="new-password">"New password"</label>
                    <input
                        type="password"
                        id="new-password"
                        prop:value=new_password
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        required
                        disabled=busy
                    />
                </div>
                <div class="form-group">
                    <label for="confirm-new-password">"Confirm new password"</label>
                    <input
                        type="password"
                        id="confirm-new-password"
                        prop:value=confirm_password
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        required
                        disabled=busy
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=busy>
                    {move || if busy.get() { "Saving…" } else { "Change password" }}
                </button>
            </form>
        </div>
    }
}
