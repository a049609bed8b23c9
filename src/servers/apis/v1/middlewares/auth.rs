//! Authentication middleware for the API.
//!
//! It uses a "token" GET param to authenticate the user. URLs must be of the
//! form:
//!
//! `http://<host>:<port>/api/v1/<context>?token=<token>`.
//!
//! > **NOTICE**: the token can be at any position in the URL, not just at the
//! > beginning or at the end.
//!
//! The token must be one of the `access_tokens` in the
//! [HTTP API configuration](downlog_api_configuration::HttpApi).
//!
//! The configuration file `downlog-api.toml` contains a list of tokens:
//!
//! ```toml
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! All the tokens have the same permissions, so it is not possible to have
//! different permissions for different tokens. The label is only used to
//! identify the token.
//!
//! A missing token produces a `401` response with the `unauthorized` error
//! code. A token that is not in the configuration produces a `401` response
//! with the `token_not_valid` error code. In both cases the request is
//! rejected before reaching any handler.
use std::sync::Arc;

use axum::extract::{Query, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use downlog_api_configuration::AccessTokens;
use serde::Deserialize;

use crate::servers::apis::v1::responses::{token_not_valid_response, unauthorized_response};

/// The shared state for the authentication middleware.
#[derive(Clone, Debug)]
pub struct State {
    pub access_tokens: Arc<AccessTokens>,
}

/// Container for the `token` extracted from the query params.
#[derive(Deserialize, Debug)]
pub struct QueryParams {
    pub token: Option<String>,
}

/// Middleware for authentication using a "token" GET param.
/// The token must be one of the tokens in the
/// [HTTP API configuration](downlog_api_configuration::HttpApi).
pub async fn auth(
    axum::extract::State(state): axum::extract::State<State>,
    Query(params): Query<QueryParams>,
    request: Request,
    next: Next,
) -> Response {
    let Some(token) = params.token else {
        return AuthError::Unauthorized.into_response();
    };

    if !authenticate(&token, &state.access_tokens) {
        return AuthError::TokenNotValid.into_response();
    }

    next.run(request).await
}

enum AuthError {
    /// Missing token for authentication.
    Unauthorized,
    /// Token was provided but it is not valid.
    TokenNotValid,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized => unauthorized_response(),
            AuthError::TokenNotValid => token_not_valid_response(),
        }
    }
}

fn authenticate(token: &str, access_tokens: &AccessTokens) -> bool {
    access_tokens.values().any(|t| t == token)
}
