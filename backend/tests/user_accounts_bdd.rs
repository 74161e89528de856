//! Behaviour tests for user account management.
//!
//! Scenarios drive the account service over the in-memory repository and
//! render each reply through the HTTP response mapper, so statuses and bodies
//! match what clients observe.

use std::sync::{Arc, Mutex};

use accounts::domain::ports::UserAccounts;
use accounts::domain::validation::{USER_ID_PARAM, ValidationRequest};
use accounts::domain::{EmailAddress, NewUser, User, UserAccountsService, UserName};
use accounts::inbound::http::reply::respond;
use accounts::outbound::memory::InMemoryUserRepository;
use actix_web::HttpResponse;
use actix_web::body::to_bytes;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;

struct AccountsWorld {
    runtime: Runtime,
    repository: Arc<InMemoryUserRepository>,
    service: UserAccountsService<InMemoryUserRepository>,
    stored: Option<User>,
    last_status: Option<u16>,
    last_body: Option<Value>,
}

impl std::fmt::Debug for AccountsWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsWorld")
            .field("stored", &self.stored)
            .field("last_status", &self.last_status)
            .field("last_body", &self.last_body)
            .finish_non_exhaustive()
    }
}

impl AccountsWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime should initialise");
        let repository = Arc::new(InMemoryUserRepository::new());
        Self {
            runtime,
            service: UserAccountsService::new(Arc::clone(&repository)),
            repository,
            stored: None,
            last_status: None,
            last_body: None,
        }
    }

    fn record(&mut self, response: HttpResponse) {
        self.last_status = Some(response.status().as_u16());
        let bytes = self
            .runtime
            .block_on(to_bytes(response.into_body()))
            .expect("response body should be readable");
        self.last_body = Some(serde_json::from_slice(&bytes).expect("JSON body"));
    }

    fn stored_id(&self) -> String {
        self.stored
            .as_ref()
            .expect("a user should be stored")
            .id()
            .to_string()
    }

    fn update_stored(&mut self, body: Value) {
        let request = ValidationRequest::new()
            .with_param(USER_ID_PARAM, self.stored_id())
            .with_body(body);
        let reply = self.runtime.block_on(self.service.update_user(request));
        self.record(respond(reply));
    }

    fn returned_user(&self) -> &Value {
        self.last_body
            .as_ref()
            .and_then(|body| body.get("data"))
            .expect("reply should carry a user")
    }
}

#[fixture]
fn world() -> Mutex<AccountsWorld> {
    Mutex::new(AccountsWorld::new())
}

#[given("an empty user store")]
fn an_empty_user_store(world: &Mutex<AccountsWorld>) {
    let world = world.lock().expect("world lock");
    assert!(world.stored.is_none());
}

#[given("a stored user {name} with email {email}")]
fn a_stored_user(world: &Mutex<AccountsWorld>, name: String, email: String) {
    let mut world = world.lock().expect("world lock");
    let record = NewUser::enabled(
        UserName::new(name).expect("valid name"),
        EmailAddress::new(email).expect("valid email"),
    );
    let repository = Arc::clone(&world.repository);
    let stored = world
        .runtime
        .block_on(repository.insert_with_credential(&record, "s3cret"))
        .expect("seed insert should succeed");
    world.stored = Some(stored);
}

#[when("a client registers {name} with email {email}")]
fn a_client_registers(world: &Mutex<AccountsWorld>, name: String, email: String) {
    let mut world = world.lock().expect("world lock");
    let request = ValidationRequest::new().with_body(json!({ "name": name, "email": email }));
    let reply = world.runtime.block_on(world.service.create_user(request));
    world.record(respond(reply));
}

#[when("a client registers with an empty body")]
fn a_client_registers_with_an_empty_body(world: &Mutex<AccountsWorld>) {
    let mut world = world.lock().expect("world lock");
    let reply = world
        .runtime
        .block_on(world.service.create_user(ValidationRequest::new()));
    world.record(respond(reply));
}

#[when("the stored user is renamed to {name}")]
fn the_stored_user_is_renamed(world: &Mutex<AccountsWorld>, name: String) {
    let mut world = world.lock().expect("world lock");
    world.update_stored(json!({ "name": name.trim_matches('"') }));
}

#[when("the stored user status is set to {status}")]
fn the_stored_user_status_is_set(world: &Mutex<AccountsWorld>, status: String) {
    let mut world = world.lock().expect("world lock");
    world.update_stored(json!({ "status": status }));
}

#[when("a client fetches user {user_id}")]
fn a_client_fetches_user(world: &Mutex<AccountsWorld>, user_id: String) {
    let mut world = world.lock().expect("world lock");
    let request = ValidationRequest::new().with_param(USER_ID_PARAM, user_id);
    let reply = world.runtime.block_on(world.service.get_user(request));
    world.record(respond(reply));
}

#[then("the reply status is {status}")]
fn the_reply_status_is(world: &Mutex<AccountsWorld>, status: u16) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.last_status, Some(status), "body: {:?}", world.last_body);
}

#[then("the returned user is enabled")]
fn the_returned_user_is_enabled(world: &Mutex<AccountsWorld>) {
    let world = world.lock().expect("world lock");
    let user = world.returned_user();
    assert_eq!(user.get("status").and_then(Value::as_str), Some("enabled"));
    assert!(user.get("password").is_none());
}

#[then("the returned user is named {name}")]
fn the_returned_user_is_named(world: &Mutex<AccountsWorld>, name: String) {
    let world = world.lock().expect("world lock");
    let user = world.returned_user();
    assert_eq!(
        user.get("name").and_then(Value::as_str),
        Some(name.as_str())
    );
}

#[then("the violations read {message}")]
fn the_violations_read(world: &Mutex<AccountsWorld>, message: String) {
    let world = world.lock().expect("world lock");
    let messages: Vec<&str> = world
        .last_body
        .as_ref()
        .and_then(|body| body.get("errors"))
        .and_then(Value::as_array)
        .expect("violations array")
        .iter()
        .filter_map(|violation| violation.get("msg").and_then(Value::as_str))
        .collect();
    assert_eq!(messages, vec![message.as_str()]);
}

#[then("{count} violations are reported")]
fn violations_are_reported(world: &Mutex<AccountsWorld>, count: usize) {
    let world = world.lock().expect("world lock");
    let violations = world
        .last_body
        .as_ref()
        .and_then(|body| body.get("errors"))
        .and_then(Value::as_array)
        .expect("violations array");
    assert_eq!(violations.len(), count);
}

#[scenario(path = "tests/features/user_accounts.feature")]
fn user_accounts(world: Mutex<AccountsWorld>) {
    drop(world);
}
