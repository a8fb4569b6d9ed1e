use contracts::shared::envelope::ApiResponse;
use contracts::system::auth::{
    AuthResponseData, LoginRequest, MessageData, PasswordChangeRequest, PasswordResetConfirmation,
    PasswordResetRequest, UserModel,
};

use crate::shared::api::ApiClient;

/// Login with email and password. On success the bearer token is stored so
/// every following request carries it.
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> ApiResponse<AuthResponseData> {
    let request = LoginRequest { email, password };
    let response: ApiResponse<AuthResponseData> = client.post("/auth/login", &request).await;

    if response.success && !response.data.access_token.is_empty() {
        client.tokens().set(&response.data.access_token);
    }

    response
}

/// Current user profile. Deliberately uncached: identity must be fresh
/// right after a login switch.
pub async fn get_profile(client: &ApiClient) -> ApiResponse<UserModel> {
    client.get_with("/auth/profile", false, None).await
}

pub async fn change_password(
    client: &ApiClient,
    request: &PasswordChangeRequest,
) -> ApiResponse<MessageData> {
    client.post("/auth/change-password", request).await
}

pub async fn request_password_reset(client: &ApiClient, email: String) -> ApiResponse<MessageData> {
    let request = PasswordResetRequest { email };
    client.post("/auth/password-reset", &request).await
}

pub async fn confirm_password_reset(
    client: &ApiClient,
    request: &PasswordResetConfirmation,
) -> ApiResponse<MessageData> {
    client.post("/auth/password-reset/confirm", request).await
}

/// Drops the stored token. Purely client-side; the backend session is
/// stateless.
pub fn logout(client: &ApiClient) {
    client.tokens().clear();
}
