use crate::{
    auth::{generate_token, hash_password, verify_password, LoginRequest, LoginResponse, RegisterRequest},
    error::AppError,
    models::User,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::SqlitePool;

/// Register a new user
///
/// Creates a new user account. The password is stored as a bcrypt hash and
/// omitted from the response body.
#[utoipa::path(
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Username or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[post("/users")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    body: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    let body = body.into_inner();

    // Check if the username or email already exists
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM users WHERE username = ? OR email = ?")
            .bind(&body.username)
            .bind(&body.email)
            .fetch_optional(&**pool)
            .await?;

    if existing.is_some() {
        return Err(AppError::BadRequest(
            "Username or email already exists".into(),
        ));
    }

    let password_hash = hash_password(&body.password)?;
    let created_at = Utc::now();

    let result =
        sqlx::query("INSERT INTO users (username, email, password, created_at) VALUES (?, ?, ?, ?)")
            .bind(&body.username)
            .bind(&body.email)
            .bind(&password_hash)
            .bind(created_at)
            .execute(&**pool)
            .await?;

    let user = User {
        id: result.last_insert_rowid(),
        username: body.username,
        email: body.email,
        password: password_hash,
        created_at,
    };

    Ok(HttpResponse::Created().json(user))
}

/// Get all users
///
/// Retrieves every user record, unfiltered and without authentication.
#[utoipa::path(
    responses(
        (status = 200, description = "A JSON array of all users", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[get("/users")]
pub async fn list_users(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password, created_at FROM users ORDER BY id",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(users))
}

/// User login
///
/// Authenticates by email and password and issues a signed access token.
#[utoipa::path(
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User authenticated successfully", body = LoginResponse),
        (status = 400, description = "Unknown email or invalid password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users Operations"
)]
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password, created_at FROM users WHERE email = ?",
    )
    .bind(&body.email)
    .fetch_optional(&**pool)
    .await?;

    let user = match user {
        Some(user) => user,
        None => return Err(AppError::BadRequest("User not found".into())),
    };

    if !verify_password(&body.password, &user.password)? {
        return Err(AppError::BadRequest("Invalid password".into()));
    }

    let access_token = generate_token(user.id)?;
    Ok(HttpResponse::Ok().json(LoginResponse { access_token }))
}
