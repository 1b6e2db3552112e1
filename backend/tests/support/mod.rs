//! Shared stub ports backing endpoint tests without a database.

#![allow(dead_code, reason = "helpers are shared across test binaries")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::App;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web;
use async_trait::async_trait;

use backend::domain::import::{ImportError, ImportSummary};
use backend::domain::loans::LoanTally;
use backend::domain::ports::{ImportRunner, UserPersistenceError, UserRepository};
use backend::domain::user::{User, UserFields, UserId};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::build_app;

/// In-memory users table honouring the repository port contract: unique
/// `id_document` with conflict-ignoring inserts, affected-row semantics for
/// update and delete, and a computed loans report.
#[derive(Default)]
pub struct StubUserRepository {
    state: Mutex<StubState>,
}

#[derive(Default)]
struct StubState {
    users: Vec<User>,
    next_id: i32,
    loans: HashMap<i32, i64>,
    fail_queries: bool,
}

impl StubUserRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Record `count` loans against a stored user for the report.
    pub fn add_loans(&self, user_id: i32, count: i64) {
        let mut state = self.state.lock().expect("state lock");
        state.loans.insert(user_id, count);
    }

    /// Make every subsequent call fail with a query error.
    pub fn fail_from_now_on(&self) {
        let mut state = self.state.lock().expect("state lock");
        state.fail_queries = true;
    }

    pub fn stored_users(&self) -> Vec<User> {
        let state = self.state.lock().expect("state lock");
        state.users.clone()
    }
}

impl StubState {
    fn check_failure(&self) -> Result<(), UserPersistenceError> {
        if self.fail_queries {
            return Err(UserPersistenceError::query("simulated query failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn insert(&self, fields: &UserFields) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.check_failure()?;
        if state
            .users
            .iter()
            .any(|u| u.id_document == fields.id_document)
        {
            return Ok(None);
        }
        state.next_id += 1;
        let user = User {
            id: state.next_id,
            full_name: fields.full_name.clone(),
            id_document: fields.id_document.clone(),
            address: fields.address.clone(),
            city: fields.city.clone(),
            phone_number: fields.phone_number.clone(),
            email: fields.email.clone(),
        };
        state.users.push(user.clone());
        Ok(Some(user))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        state.check_failure()?;
        Ok(state.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        state.check_failure()?;
        Ok(state.users.iter().find(|u| u.id == id.get()).cloned())
    }

    async fn update(
        &self,
        id: UserId,
        fields: &UserFields,
    ) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.check_failure()?;
        let Some(user) = state.users.iter_mut().find(|u| u.id == id.get()) else {
            return Ok(false);
        };
        user.full_name = fields.full_name.clone();
        user.id_document = fields.id_document.clone();
        user.address = fields.address.clone();
        user.city = fields.city.clone();
        user.phone_number = fields.phone_number.clone();
        user.email = fields.email.clone();
        Ok(true)
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.check_failure()?;
        let before = state.users.len();
        state.users.retain(|u| u.id != id.get());
        Ok(state.users.len() < before)
    }

    async fn loans_per_user(&self) -> Result<Vec<LoanTally>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        state.check_failure()?;
        let mut tallies: Vec<LoanTally> = state
            .users
            .iter()
            .map(|user| LoanTally {
                user_id: user.id,
                full_name: user.full_name.clone(),
                total_loans: state.loans.get(&user.id).copied().unwrap_or(0),
            })
            .collect();
        tallies.sort_by(|a, b| b.total_loans.cmp(&a.total_loans));
        Ok(tallies)
    }
}

/// Import runner returning a canned outcome.
pub struct StubImportRunner {
    outcome: Mutex<StubImportOutcome>,
}

enum StubImportOutcome {
    Summary(ImportSummary),
    Failure(String),
}

impl StubImportRunner {
    pub fn with_summary(summary: ImportSummary) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(StubImportOutcome::Summary(summary)),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(StubImportOutcome::Failure(message.to_owned())),
        })
    }
}

#[async_trait]
impl ImportRunner for StubImportRunner {
    async fn run(&self) -> Result<ImportSummary, ImportError> {
        let outcome = self.outcome.lock().expect("outcome lock");
        match &*outcome {
            StubImportOutcome::Summary(summary) => Ok(summary.clone()),
            StubImportOutcome::Failure(message) => Err(ImportError::Storage {
                message: message.clone(),
            }),
        }
    }
}

/// Assemble the full application over stub ports.
pub fn test_app(
    repository: Arc<StubUserRepository>,
    importer: Arc<dyn ImportRunner>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = web::Data::new(HttpState::new(repository, importer));
    let health_state = web::Data::new(HealthState::new());
    build_app(state, health_state)
}

/// A payload that passes every field check.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "full_name": "Ada Lovelace",
        "id_document": "CC10203040",
        "address": "12 Analytical Row",
        "city": "London",
        "phone_number": "+44 20 7946 0958",
        "email": "ada@example.com",
    })
}
