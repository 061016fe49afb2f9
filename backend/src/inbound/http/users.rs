//! Users API handlers.
//!
//! ```text
//! GET    /users?name=Al&pageNumber=0&pageSize=3
//! POST   /users?name=Alice&phone=555
//! GET    /users/1
//! PATCH  /users/1?phone=556
//! DELETE /users/1
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::{ContactPatch, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::params::{ContactQuery, NameQuery, PagingQuery};
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{NAME, PHONE, page_request, require};

/// List users, optionally filtered by a name substring.
///
/// A blank `name` lists every user.
#[utoipa::path(
    get,
    path = "/users",
    params(NameQuery, PagingQuery),
    responses(
        (status = 200, description = "One page of users", body = [UserSchema]),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "findUsers"
)]
#[get("/users")]
pub async fn find_users(
    state: web::Data<HttpState>,
    filter: web::Query<NameQuery>,
    paging: web::Query<PagingQuery>,
) -> ApiResult<web::Json<Vec<User>>> {
    let page = page_request(paging.into_inner().into())?;
    let name = filter
        .into_inner()
        .name
        .filter(|name| !name.trim().is_empty());
    let users = match name {
        Some(name) => state.users.find_users_by_name(&name, &page)?,
        None => state.users.find_all_users(&page)?,
    };
    Ok(web::Json(users))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    params(ContactQuery),
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Missing or blank field, or duplicate user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    query: web::Query<ContactQuery>,
) -> ApiResult<HttpResponse> {
    let ContactQuery { name, phone } = query.into_inner();
    let name = require(name, NAME)?;
    let phone = require(phone, PHONE)?;
    let user = state.users.create_user(&name, &phone)?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "findUserById"
)]
#[get("/users/{id}")]
pub async fn find_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.find_user_by_id(UserId::new(path.into_inner()))?;
    Ok(web::Json(user))
}

/// Replace the supplied fields of a user.
///
/// Omitted fields keep their value; a supplied blank field is rejected.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier"), ContactQuery),
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Blank field or malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    query: web::Query<ContactQuery>,
) -> ApiResult<web::Json<User>> {
    let ContactQuery { name, phone } = query.into_inner();
    let user = state
        .users
        .update_user(UserId::new(path.into_inner()), ContactPatch::new(name, phone))?;
    Ok(web::Json(user))
}

/// Delete a user and all of its records.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state.users.delete_user(UserId::new(path.into_inner()))?;
    Ok(HttpResponse::Ok().finish())
}
