//! Users API handlers.
//!
//! ```text
//! POST   /upload-users        create one user from a JSON body
//! GET    /users               list users
//! GET    /users/{id}          fetch one user
//! PUT    /update-user/{id}    replace every field of one user
//! DELETE /users/{id}          delete one user
//! ```
//!
//! Every mutating handler runs presence checks, normalisation, and field
//! validation before touching storage, answering 400 on the first failing
//! check.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User, UserFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    map_validation_error, missing_field_error, parse_user_id,
};

/// Request payload carrying the six user fields.
///
/// All fields are optional at the serde layer so an absent field produces
/// the structured `missing_field` 400 rather than a deserialisation error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UserPayload {
    pub full_name: Option<String>,
    pub id_document: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// Response payload for a successful creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserResponse {
    pub message: String,
    pub user: User,
}

/// Plain acknowledgement payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn require(value: Option<String>, field: &'static str) -> Result<String, Error> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing_field_error(field))
}

/// Presence-check, normalise, and validate a payload.
fn parse_user_payload(payload: UserPayload) -> Result<UserFields, Error> {
    let full_name = require(payload.full_name, "full_name")?;
    let id_document = require(payload.id_document, "id_document")?;
    let address = require(payload.address, "address")?;
    let city = require(payload.city, "city")?;
    let phone_number = require(payload.phone_number, "phone_number")?;
    let email = require(payload.email, "email")?;

    let fields = UserFields::normalised(
        &full_name,
        &id_document,
        &address,
        &city,
        &phone_number,
        &email,
    );
    fields.validate().map_err(map_validation_error)?;
    Ok(fields)
}

pub(crate) fn map_persistence_error(error: UserPersistenceError) -> Error {
    Error::internal(error.to_string())
}

/// Create one user from a JSON body.
#[utoipa::path(
    post,
    path = "/upload-users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Conflicting id document", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/upload-users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let fields = parse_user_payload(payload.into_inner())?;

    match state
        .users
        .insert(&fields)
        .await
        .map_err(map_persistence_error)?
    {
        Some(user) => {
            info!(user_id = user.id, "user created");
            Ok(HttpResponse::Created().json(CreatedUserResponse {
                message: "user created".to_owned(),
                user,
            }))
        }
        None => Err(Error::conflict(
            "a user with this id document already exists",
        )),
    }
}

/// List every user, ordered by identifier.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await.map_err(map_persistence_error)?;
    Ok(web::Json(users))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found("user not found"))?;
    Ok(web::Json(user))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/update-user/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/update-user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;
    let fields = parse_user_payload(payload.into_inner())?;

    let updated = state
        .users
        .update(id, &fields)
        .await
        .map_err(map_persistence_error)?;
    if !updated {
        return Err(Error::not_found("user not found"));
    }

    info!(user_id = id.get(), "user updated");
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "user updated".to_owned(),
    }))
}

/// Delete one user by identifier.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;

    let deleted = state
        .users
        .delete(id)
        .await
        .map_err(map_persistence_error)?;
    if !deleted {
        return Err(Error::not_found("user not found"));
    }

    info!(user_id = id.get(), "user deleted");
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "user deleted".to_owned(),
    }))
}
