//! Records API handlers, nested under their owning user.
//!
//! ```text
//! GET    /users/1/records?pageNumber=0&pageSize=3
//! POST   /users/1/records?name=Mum&phone=555
//! GET    /users/1/records/by_phone?phone=555
//! GET    /users/1/records/2
//! PATCH  /users/1/records/2?name=Mother
//! DELETE /users/1/records/2
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::{ContactPatch, Record, RecordId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::params::{ContactQuery, PagingQuery, PhoneQuery};
use crate::inbound::http::schemas::{ErrorSchema, RecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{NAME, PHONE, page_request, require};

fn record_path(path: web::Path<(u64, u64)>) -> (UserId, RecordId) {
    let (user_id, record_id) = path.into_inner();
    (UserId::new(user_id), RecordId::new(record_id))
}

/// List one page of a user's records.
#[utoipa::path(
    get,
    path = "/users/{id}/records",
    params(("id" = u64, Path, description = "User identifier"), PagingQuery),
    responses(
        (status = 200, description = "One page of records", body = [RecordSchema]),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "findRecords"
)]
#[get("/users/{id}/records")]
pub async fn find_records(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    paging: web::Query<PagingQuery>,
) -> ApiResult<web::Json<Vec<Record>>> {
    let page = page_request(paging.into_inner().into())?;
    let records = state
        .records
        .find_all_records(UserId::new(path.into_inner()), &page)?;
    Ok(web::Json(records))
}

/// Add a record to a user.
#[utoipa::path(
    post,
    path = "/users/{id}/records",
    params(("id" = u64, Path, description = "User identifier"), ContactQuery),
    responses(
        (status = 201, description = "Record created", body = RecordSchema),
        (status = 400, description = "Missing or blank field, or duplicate record", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "createRecord"
)]
#[post("/users/{id}/records")]
pub async fn create_record(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    query: web::Query<ContactQuery>,
) -> ApiResult<HttpResponse> {
    let ContactQuery { name, phone } = query.into_inner();
    let name = require(name, NAME)?;
    let phone = require(phone, PHONE)?;
    let record = state
        .records
        .create_record(UserId::new(path.into_inner()), &name, &phone)?;
    Ok(HttpResponse::Created().json(record))
}

/// Find the lowest-id record whose phone matches exactly.
#[utoipa::path(
    get,
    path = "/users/{id}/records/by_phone",
    params(("id" = u64, Path, description = "User identifier"), PhoneQuery),
    responses(
        (status = 200, description = "Matching record", body = RecordSchema),
        (status = 400, description = "Missing phone", body = ErrorSchema),
        (status = 404, description = "No such user or no matching record", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "findRecordByPhone"
)]
#[get("/users/{id}/records/by_phone")]
pub async fn find_record_by_phone(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    query: web::Query<PhoneQuery>,
) -> ApiResult<web::Json<Record>> {
    let phone = require(query.into_inner().phone, PHONE)?;
    let record = state
        .records
        .find_record_by_phone(UserId::new(path.into_inner()), &phone)?;
    Ok(web::Json(record))
}

/// Fetch one record.
#[utoipa::path(
    get,
    path = "/users/{id}/records/{rid}",
    params(
        ("id" = u64, Path, description = "User identifier"),
        ("rid" = u64, Path, description = "Record identifier within the user")
    ),
    responses(
        (status = 200, description = "Record", body = RecordSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user or record", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "findRecordById"
)]
#[get("/users/{id}/records/{rid}")]
pub async fn find_record(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
) -> ApiResult<web::Json<Record>> {
    let (user_id, record_id) = record_path(path);
    let record = state.records.find_record_by_id(user_id, record_id)?;
    Ok(web::Json(record))
}

/// Replace the supplied fields of a record.
#[utoipa::path(
    patch,
    path = "/users/{id}/records/{rid}",
    params(
        ("id" = u64, Path, description = "User identifier"),
        ("rid" = u64, Path, description = "Record identifier within the user"),
        ContactQuery
    ),
    responses(
        (status = 200, description = "Updated record", body = RecordSchema),
        (status = 400, description = "Blank field or malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user or record", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "updateRecord"
)]
#[patch("/users/{id}/records/{rid}")]
pub async fn update_record(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
    query: web::Query<ContactQuery>,
) -> ApiResult<web::Json<Record>> {
    let (user_id, record_id) = record_path(path);
    let ContactQuery { name, phone } = query.into_inner();
    let record = state
        .records
        .update_record(user_id, record_id, ContactPatch::new(name, phone))?;
    Ok(web::Json(record))
}

/// Delete one record.
#[utoipa::path(
    delete,
    path = "/users/{id}/records/{rid}",
    params(
        ("id" = u64, Path, description = "User identifier"),
        ("rid" = u64, Path, description = "Record identifier within the user")
    ),
    responses(
        (status = 200, description = "Record deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user or record", body = ErrorSchema)
    ),
    tags = ["records"],
    operation_id = "deleteRecord"
)]
#[delete("/users/{id}/records/{rid}")]
pub async fn delete_record(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
) -> ApiResult<HttpResponse> {
    let (user_id, record_id) = record_path(path);
    state.records.delete_record(user_id, record_id)?;
    Ok(HttpResponse::Ok().finish())
}
