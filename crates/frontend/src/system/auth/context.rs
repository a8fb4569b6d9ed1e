use contracts::system::auth::UserModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiClient;
use crate::system::session;

use super::api;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserModel>,
}

/// Auth context provider. Wires the gateway's session-kill event into the
/// reactive state and restores a live session from the stored cookie on
/// mount.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");

    // Any 401 anywhere drops the whole session back to the login view.
    client.set_unauthorized_handler(move || {
        session::clear_activity();
        set_auth_state.set(AuthState::default());
    });

    let restore_client = client.clone();
    Effect::new(move |_| {
        let client = restore_client.clone();
        spawn_local(async move {
            let Some(token) = client.tokens().get() else {
                return;
            };
            let profile = api::get_profile(&client).await;
            if profile.success {
                session::touch_activity();
                set_auth_state.set(AuthState {
                    access_token: Some(token),
                    user: Some(profile.data),
                });
            } else {
                client.tokens().clear();
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");
    (auth_state, set_auth_state)
}

/// Performs the login call and adopts the session on success.
pub async fn do_login(
    client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(client, email, password).await;
    if !response.success {
        return Err(response
            .error
            .or(response.message)
            .unwrap_or_else(|| "Login failed".to_string()));
    }

    session::touch_activity();
    set_auth_state.set(AuthState {
        access_token: Some(response.data.access_token),
        user: response.data.user,
    });
    Ok(())
}

pub fn do_logout(client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    api::logout(client);
    session::clear_activity();
    set_auth_state.set(AuthState::default());
}
