use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};

use crate::backend::auth::hash_access_token;
use crate::backend::error::ApiError;
use crate::backend::state::AppState;

pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub role: String,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            // Extract Authorization: Bearer <token>
            let TypedHeader(authz): TypedHeader<Authorization<Bearer>> =
                TypedHeader::from_request_parts(parts, state)
                    .await
                    .map_err(|_| ApiError::session_expired())?;

            let token_hash = hash_access_token(authz.token());

            let store = state.store.read().await;
            let user = store
                .user_for_token_hash(&token_hash)
                .ok_or_else(ApiError::session_expired)?;

            Ok(AuthContext {
                user_id: user.id.clone(),
                role: user.role.clone(),
            })
        }
    }
}
