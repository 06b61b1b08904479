pub mod docs;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

use crate::auth::AuthMiddleware;

/// Registers every API route.
///
/// Public routes are registered first; the protected task resources carry
/// `AuthMiddleware` individually so `GET /tasks/{username}` stays open while
/// `GET /tasks` and the status update require a bearer token.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(users::register)
        .service(users::list_users)
        .service(users::login)
        .service(tasks::list_all_tasks)
        .service(tasks::list_tasks_by_username)
        .service(
            web::resource("/tasks")
                .route(web::post().to(tasks::create_task))
                .route(web::get().to(tasks::list_my_tasks))
                .wrap(AuthMiddleware),
        )
        .service(
            web::resource("/tasks/{task_id}/status")
                .route(web::put().to(tasks::update_task_status))
                .wrap(AuthMiddleware),
        );
}
