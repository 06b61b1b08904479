//! OpenAPI document for the interactive docs served at `/api-docs`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::models::{Task, TaskInput, TaskStatus, User};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskdesk API",
        description = "API documentation for user and task management"
    ),
    paths(
        crate::routes::users::register,
        crate::routes::users::list_users,
        crate::routes::users::login,
        crate::routes::tasks::list_all_tasks,
        crate::routes::tasks::list_tasks_by_username,
        crate::routes::tasks::create_task,
        crate::routes::tasks::list_my_tasks,
        crate::routes::tasks::update_task_status,
    ),
    components(schemas(
        User,
        Task,
        TaskInput,
        TaskStatus,
        RegisterRequest,
        LoginRequest,
        LoginResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Operations related to users management"),
        (name = "Users Operations", description = "Task creation operations")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .as_mut()
            .expect("components are registered by the derive");
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/users",
            "/login",
            "/Usertasks",
            "/tasks",
            "/tasks/{username}",
            "/tasks/{taskId}/status",
        ] {
            assert!(paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_openapi_document_keeps_wire_tag_names() {
        let doc = ApiDoc::openapi();
        let tags: Vec<&str> = doc
            .tags
            .as_ref()
            .expect("tags are declared on the derive")
            .iter()
            .map(|tag| tag.name.as_str())
            .collect();

        assert!(tags.contains(&"Users"));
        assert!(tags.contains(&"Users Operations"));
    }
}
