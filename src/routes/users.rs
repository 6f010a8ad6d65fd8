use crate::{
    auth::{generate_token, hash_password, verify_password, AuthenticatedUser, Credentials},
    config::Config,
    cookies::{removal_cookie, session_cookie},
    error::{ApiError, ErrorBody},
    models::UserProfile,
    response::{ApiResponse, ApiResponseBuilder},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Register a new user
///
/// Rejects duplicate emails and stores only the bcrypt hash of the password.
#[utoipa::path(
    post,
    path = "/users",
    request_body = Credentials,
    responses(
        (status = 200, description = "User created", body = ApiResponse),
        (status = 400, description = "Missing field or duplicate email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("")]
pub async fn create_user(
    pool: web::Data<PgPool>,
    body: web::Json<Credentials>,
) -> Result<impl Responder, ApiError> {
    let email = body.email()?;
    let password = body.password()?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(&**pool)
        .await?;

    if existing.is_some() {
        return Err(ApiError::BadRequest("User already exists".into()));
    }

    let password_hash = hash_password(password)?;

    sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, $2)")
        .bind(email)
        .bind(password_hash)
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .message("User created successfully")
            .build(),
    ))
}

/// Login
///
/// Verifies the credentials, issues a signed token naming the user, and
/// attaches it to the response as the `token` cookie. The body carries no
/// token; the cookie is the only credential transport.
#[utoipa::path(
    post,
    path = "/users/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse,
         headers(("Set-Cookie" = String, description = "The `token` session cookie"))),
        (status = 400, description = "Missing field, unknown user, or wrong password", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    body: web::Json<Credentials>,
) -> Result<impl Responder, ApiError> {
    let email = body.email()?;
    let password = body.password()?;

    let user: Option<(i32, String)> =
        sqlx::query_as("SELECT id, password_hash FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&**pool)
            .await?;

    let (user_id, password_hash) = match user {
        Some(user) => user,
        None => return Err(ApiError::BadRequest("User not found".into())),
    };

    if !verify_password(password, &password_hash)? {
        return Err(ApiError::BadRequest("Invalid password".into()));
    }

    let token = generate_token(user_id, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().cookie(session_cookie(token)).json(
        ApiResponseBuilder::new()
            .message("User logged in successfully")
            .build(),
    ))
}

/// Current user
///
/// Returns the authenticated user's record minus the password hash and id.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "The authenticated user's profile", body = ApiResponse),
        (status = 400, description = "User no longer exists", body = ErrorBody),
        (status = 401, description = "Missing or invalid token cookie", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("")]
pub async fn current_user(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, ApiError> {
    let profile: Option<UserProfile> =
        sqlx::query_as("SELECT email, created_at FROM users WHERE id = $1")
            .bind(user.0)
            .fetch_optional(&**pool)
            .await?;

    let profile = match profile {
        Some(profile) => profile,
        None => return Err(ApiError::BadRequest("User not found".into())),
    };

    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .data(serde_json::to_value(profile)?)
            .build(),
    ))
}

/// Logout
///
/// Erases the `token` cookie. The signed token itself is not revoked
/// server-side; stateless tokens stay valid until secret rotation.
#[utoipa::path(
    post,
    path = "/users/logout",
    responses(
        (status = 200, description = "Cookie erased", body = ApiResponse,
         headers(("Set-Cookie" = String, description = "Removal cookie expiring `token`")))
    ),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout() -> Result<impl Responder, ApiError> {
    Ok(HttpResponse::Ok().cookie(removal_cookie()).json(
        ApiResponseBuilder::new()
            .message("User logged out successfully")
            .build(),
    ))
}
