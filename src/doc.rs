//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification for the REST API:
//! every route handler, the envelope schemas, and the `token` cookie security
//! scheme. The document is served by Swagger UI at `/docs` and as raw JSON at
//! `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::Credentials;
use crate::error::ErrorBody;
use crate::models::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest, UserProfile};
use crate::response::ApiResponse;

/// Enrich the generated document with the token cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "TokenCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "token",
                "Signed token cookie issued by POST /users/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bytive API",
        description = "A to-do list API: cookie-authenticated users and their tasks. \
                       Every response uses the uniform statusCode envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("TokenCookie" = [])),
    paths(
        crate::routes::health::health,
        crate::routes::users::create_user,
        crate::routes::users::login,
        crate::routes::users::current_user,
        crate::routes::users::logout,
        crate::routes::tasks::create_task,
        crate::routes::tasks::list_tasks,
        crate::routes::tasks::get_task,
        crate::routes::tasks::update_task,
        crate::routes::tasks::delete_task,
    ),
    components(schemas(
        ApiResponse,
        ErrorBody,
        Credentials,
        UserProfile,
        Task,
        TaskStatus,
        CreateTaskRequest,
        UpdateTaskRequest
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "users", description = "Registration, login, logout, and the current user"),
        (name = "tasks", description = "CRUD on user-owned tasks")
    )
)]
pub struct ApiDoc;
