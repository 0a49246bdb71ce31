use super::dto::{RegisterAccountDto, SignInDto};
use crate::{
    database::error::DbError,
    modules::common::{
        dto::MessageDto,
        error_codes::INVALID_CREDENTIALS,
        extractors::ValidatedJson,
        responses::{internal_error_res, SimpleError},
    },
    server::controller::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use http::{header, HeaderMap, StatusCode};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(sign_in))
}

/// Registers a new back office account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterAccountDto,
    responses(
        (
            status = CREATED,
            description = "account created",
            body = MessageDto,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / USERNAME_IN_USE / EMAIL_IN_USE",
            body = SimpleError,
        ),
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterAccountDto>,
) -> Result<(StatusCode, Json<MessageDto>), (StatusCode, SimpleError)> {
    state
        .auth_service
        .register_account(dto)
        .await
        .map_err(DbError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::from("user registered successfully")),
    ))
}

/// Signs in with username and password
///
/// on success the session id is sent on a `sid` Set-Cookie header
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = SignInDto,
    responses(
        (
            status = OK,
            description = "login successful",
            body = MessageDto,
            headers(("Set-Cookie" = String, description = "session id cookie `sid`")),
        ),
        (
            status = BAD_REQUEST,
            description = "invalid credentials, identical for unknown usernames and wrong passwords",
            body = SimpleError,
        ),
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(dto): ValidatedJson<SignInDto>,
) -> Result<(HeaderMap, Json<MessageDto>), (StatusCode, SimpleError)> {
    let account = state
        .auth_service
        .account_from_credentials(dto.username, dto.password)
        .await
        .map_err(|_| internal_error_res())?
        .ok_or((
            StatusCode::BAD_REQUEST,
            SimpleError::from(INVALID_CREDENTIALS),
        ))?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_owned();

    let session_token = state
        .auth_service
        .new_session(account.id, user_agent)
        .await
        .map_err(|_| internal_error_res())?;

    let mut res_headers = HeaderMap::new();
    res_headers.insert(header::SET_COOKIE, session_token.into_set_cookie_header());

    Ok((res_headers, Json(MessageDto::from("login successful"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{modules::auth::service::AuthService, test_utils::test_db};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    async fn test_state() -> AppState {
        let db = test_db().await;

        AppState {
            db: db.clone(),
            auth_service: AuthService::new(db, ChaCha8Rng::seed_from_u64(42)),
        }
    }

    fn register_dto() -> RegisterAccountDto {
        RegisterAccountDto {
            username: String::from("alice"),
            email: String::from("alice@example.com"),
            password: String::from("Sup3r-secret"),
        }
    }

    #[tokio::test]
    async fn register_returns_created_with_a_message() {
        let state = test_state().await;

        let (status, Json(body)) = register(State(state), ValidatedJson(register_dto()))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, "user registered successfully");
    }

    #[tokio::test]
    async fn login_sets_the_session_cookie() {
        let state = test_state().await;

        register(State(state.clone()), ValidatedJson(register_dto()))
            .await
            .unwrap();

        let (res_headers, Json(body)) = sign_in(
            State(state),
            HeaderMap::new(),
            ValidatedJson(SignInDto {
                username: String::from("alice"),
                password: String::from("Sup3r-secret"),
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.message, "login successful");

        let cookie = res_headers
            .get(header::SET_COOKIE)
            .expect("login should set the session cookie")
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("sid="));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let state = test_state().await;

        register(State(state.clone()), ValidatedJson(register_dto()))
            .await
            .unwrap();

        let wrong_pass = sign_in(
            State(state.clone()),
            HeaderMap::new(),
            ValidatedJson(SignInDto {
                username: String::from("alice"),
                password: String::from("Wr0ng-pass"),
            }),
        )
        .await
        .err()
        .expect("wrong password should fail");

        let unknown_user = sign_in(
            State(state),
            HeaderMap::new(),
            ValidatedJson(SignInDto {
                username: String::from("ghost"),
                password: String::from("Sup3r-secret"),
            }),
        )
        .await
        .err()
        .expect("unknown username should fail");

        assert_eq!(wrong_pass.0, StatusCode::BAD_REQUEST);
        assert_eq!(unknown_user.0, StatusCode::BAD_REQUEST);

        let wrong_pass_body = serde_json::to_value(wrong_pass.1).unwrap();
        let unknown_user_body = serde_json::to_value(unknown_user.1).unwrap();
        assert_eq!(wrong_pass_body["error"], unknown_user_body["error"]);
    }
}
