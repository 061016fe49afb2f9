//! Behaviour tests for the phonebook HTTP surface.
//!
//! Each step issues one request against a fresh app built over the world's
//! shared directory, so state carries across steps exactly as it would across
//! requests to a running server.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::sync::Mutex;

use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use phonebook::Trace;
use phonebook::domain::SharedDirectory;
use phonebook::inbound::http::configure;
use phonebook::inbound::http::state::HttpState;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

#[derive(Debug, Default)]
struct PhonebookWorld {
    directory: SharedDirectory,
    last_status: Option<u16>,
    last_body: Option<Value>,
    last_user_id: Option<u64>,
}

impl PhonebookWorld {
    fn send(&mut self, request: TestRequest) {
        let state = HttpState::from_directory(self.directory.clone());
        let (status, body) = actix_rt::System::new().block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .wrap(Trace)
                    .configure(configure),
            )
            .await;
            let response = test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let bytes = test::read_body(response).await;
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, body)
        });
        self.last_status = Some(status);
        self.last_body = Some(body);
    }

    fn last_user(&self) -> u64 {
        self.last_user_id.expect("a user was created")
    }

    fn body(&self) -> &Value {
        self.last_body.as_ref().expect("a request was sent")
    }
}

#[fixture]
fn world() -> Mutex<PhonebookWorld> {
    Mutex::new(PhonebookWorld::default())
}

fn create_user(world: &mut PhonebookWorld, name: &str, phone: &str) {
    world.send(TestRequest::post().uri(&format!("/users?name={name}&phone={phone}")));
    if world.last_status == Some(201) {
        world.last_user_id = world.body()["id"].as_u64();
    }
}

#[given("an empty phonebook")]
fn an_empty_phonebook(world: &Mutex<PhonebookWorld>) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.directory.read().expect("directory").user_count(), 0);
}

#[given("users {names} exist")]
fn users_exist(world: &Mutex<PhonebookWorld>, names: String) {
    let mut world = world.lock().expect("world lock");
    for (phone, name) in names.split(',').enumerate() {
        create_user(&mut world, name, &phone.to_string());
        assert_eq!(world.last_status, Some(201));
    }
}

#[when("a user {name} with phone {phone} is created")]
fn a_user_is_created(world: &Mutex<PhonebookWorld>, name: String, phone: String) {
    let mut world = world.lock().expect("world lock");
    create_user(&mut world, &name, &phone);
}

#[when("a record {name} with phone {phone} is added to the last user")]
fn a_record_is_added(world: &Mutex<PhonebookWorld>, name: String, phone: String) {
    let mut world = world.lock().expect("world lock");
    let user_id = world.last_user();
    world.send(TestRequest::post().uri(&format!(
        "/users/{user_id}/records?name={name}&phone={phone}"
    )));
    assert_eq!(world.last_status, Some(201));
}

#[when("users page {page} of size {size} is requested")]
fn users_page_is_requested(world: &Mutex<PhonebookWorld>, page: String, size: String) {
    let mut world = world.lock().expect("world lock");
    world.send(TestRequest::get().uri(&format!("/users?pageNumber={page}&pageSize={size}")));
}

#[when("records page {page} of size {size} of the last user are requested")]
fn records_page_is_requested(world: &Mutex<PhonebookWorld>, page: String, size: String) {
    let mut world = world.lock().expect("world lock");
    let user_id = world.last_user();
    world.send(TestRequest::get().uri(&format!(
        "/users/{user_id}/records?pageNumber={page}&pageSize={size}"
    )));
}

#[when("the last user is fetched")]
fn the_last_user_is_fetched(world: &Mutex<PhonebookWorld>) {
    let mut world = world.lock().expect("world lock");
    let user_id = world.last_user();
    world.send(TestRequest::get().uri(&format!("/users/{user_id}")));
}

#[when("the last user is deleted")]
fn the_last_user_is_deleted(world: &Mutex<PhonebookWorld>) {
    let mut world = world.lock().expect("world lock");
    let user_id = world.last_user();
    world.send(TestRequest::delete().uri(&format!("/users/{user_id}")));
}

#[when("the record with phone {phone} of the last user is looked up")]
fn the_record_is_looked_up(world: &Mutex<PhonebookWorld>, phone: String) {
    let mut world = world.lock().expect("world lock");
    let user_id = world.last_user();
    world.send(TestRequest::get().uri(&format!(
        "/users/{user_id}/records/by_phone?phone={phone}"
    )));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &Mutex<PhonebookWorld>, status: String) {
    let world = world.lock().expect("world lock");
    let expected: u16 = status.parse().expect("numeric status");
    assert_eq!(world.last_status, Some(expected));
}

#[then("the response name is {name}")]
fn the_response_name_is(world: &Mutex<PhonebookWorld>, name: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.body()["name"].as_str(), Some(name.as_str()));
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &Mutex<PhonebookWorld>, code: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.body()["code"].as_str(), Some(code.as_str()));
    assert!(world.body()["traceId"].is_string(), "errors carry a trace id");
}

#[then("the response lists {names}")]
fn the_response_lists(world: &Mutex<PhonebookWorld>, names: String) {
    let world = world.lock().expect("world lock");
    let listed: Vec<&str> = world
        .body()
        .as_array()
        .expect("list body")
        .iter()
        .filter_map(|entry| entry["name"].as_str())
        .collect();
    let expected: Vec<&str> = names.split(',').collect();
    assert_eq!(listed, expected);
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Creating and fetching a user"
)]
fn creating_and_fetching_a_user(world: Mutex<PhonebookWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Duplicate users are rejected"
)]
fn duplicate_users_are_rejected(world: Mutex<PhonebookWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Users are paged in creation order"
)]
fn users_are_paged_in_creation_order(world: Mutex<PhonebookWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Deleting a user removes its records"
)]
fn deleting_a_user_removes_its_records(world: Mutex<PhonebookWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Looking up a record by phone"
)]
fn looking_up_a_record_by_phone(world: Mutex<PhonebookWorld>) {
    drop(world);
}
