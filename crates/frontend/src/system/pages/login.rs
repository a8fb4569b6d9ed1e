use contracts::system::auth::PasswordResetConfirmation;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiClient;
use crate::system::auth::{api, context::do_login, context::use_auth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginView {
    SignIn,
    ForgotPassword,
    ResetConfirm,
}

#[component]
#[allow(non_snake_case)]
pub fn LoginPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (_, set_auth_state) = use_auth();

    let (mode, set_mode) = signal(LoginView::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (reset_token, set_reset_token) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (info_message, set_info_message) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);

    let login_client = client.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = login_client.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();

        set_busy.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(&client, set_auth_state, email, password).await {
                Ok(()) => set_busy.set(false),
                Err(message) => {
                    set_error_message.set(Some(format!("Login failed: {message}")));
                    set_busy.set(false);
                }
            }
        });
    };

    let forgot_client = client.clone();
    let on_request_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = forgot_client.clone();
        let email = email.get_untracked().trim().to_string();
        if email.is_empty() {
            set_error_message.set(Some("Please enter your email".to_string()));
            return;
        }

        set_busy.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let response = api::request_password_reset(&client, email).await;
            if response.success {
                set_info_message.set(Some(if response.data.message.is_empty() {
                    "Check your inbox for the reset token".to_string()
                } else {
                    response.data.message
                }));
                set_mode.set(LoginView::ResetConfirm);
            } else {
                set_error_message.set(response.error);
            }
            set_busy.set(false);
        });
    };

    let reset_client = client.clone();
    let on_confirm_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_password_value = new_password.get_untracked();
        if new_password_value != confirm_password.get_untracked() {
            set_error_message.set(Some("Passwords do not match".to_string()));
            return;
        }
        let client = reset_client.clone();
        let request = PasswordResetConfirmation {
            token: reset_token.get_untracked().trim().to_string(),
            new_password: new_password_value,
            confirm_password: confirm_password.get_untracked(),
        };

        set_busy.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let response = api::confirm_password_reset(&client, &request).await;
            if response.success {
                set_info_message.set(Some("Password updated, you can sign in now".to_string()));
                set_mode.set(LoginView::SignIn);
            } else {
                set_error_message.set(response.error);
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Catalog Admin"</h1>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || info_message.get().is_some()>
                    <div class="info-message">{move || info_message.get().unwrap_or_default()}</div>
                </Show>

                <Show when=move || mode.get() == LoginView::SignIn>
                    <form on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=busy
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=busy
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=busy>
                            {move || if busy.get() { "Signing in…" } else { "Sign in" }}
                        </button>
                    </form>
                    <button
                        class="btn-link"
                        on:click=move |_| {
                            set_error_message.set(None);
                            set_mode.set(LoginView::ForgotPassword);
                        }
                    >
                        "Forgot password?"
                    </button>
                </Show>

                <Show when=move || mode.get() == LoginView::ForgotPassword>
                    <form on:submit=on_request_reset.clone()>
                        <div class="form-group">
                            <label for="reset-email">"Email"</label>
                            <input
                                type="email"
                                id="reset-email"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=busy
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=busy>
                            "Send reset token"
                        </button>
                    </form>
                    <button
                        class="btn-link"
                        on:click=move |_| {
                            set_error_message.set(None);
                            set_mode.set(LoginView::SignIn);
                        }
                    >
                        "Back to sign in"
                    </button>
                </Show>

                <Show when=move || mode.get() == LoginView::ResetConfirm>
                    <form on:submit=on_confirm_reset.clone()>
                        <div class="form-group">
                            <label for="token">"Reset token"</label>
                            <input
                                type="text"
                                id="token"
                                prop:value=reset_token
                                on:input=move |ev| set_reset_token.set(event_target_value(&ev))
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
                            <label for="confirm-password">"Confirm password"</label>
                            <input
                                type="password"
                                id="confirm-password"
                                prop:value=confirm_password
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                required
                                disabled=busy
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=busy>
                            "Set new password"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
