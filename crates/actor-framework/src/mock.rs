//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of a running actor. It makes the hard-to-reach paths
//! deterministic: a uniqueness conflict that only appears under a race, a store that has gone
//! away, a record that vanished between two calls.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted, in order | Subject to scheduler |
//! | **State** | None (expectations only) | Real store |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | `return_err` | Requires crafting the state |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Seat { id: u32, holder: Option<String> }
//! #[derive(Debug)] struct SeatCreate;
//! #[derive(Debug)] struct SeatUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("seat error")] struct SeatError;
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = u32; type Create = SeatCreate; type Update = SeatUpdate;
//!     type Filter = (); type Context = (); type Error = SeatError;
//!     fn from_create_params(id: u32, _: SeatCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, holder: None })
//!     }
//!     async fn on_update(&mut self, _: SeatUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     fn matches(&self, _: &()) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     mock.expect_query().return_ok(vec![]);
//!     mock.expect_create().return_err(FrameworkError::Conflict("seat taken".into()));
//!
//!     let client = mock.client();
//!     assert!(client.query(()).await.unwrap().is_empty());
//!     assert!(matches!(client.create(SeatCreate).await, Err(FrameworkError::Conflict(_))));
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation (wrong kind, or wrong ID for `get` and
//! `update`) is answered with [`FrameworkError::NotFound`] describing the mismatch, so the code
//! under test fails visibly instead of hanging.
//!
//! ## Low-level Helpers
//!
//! [`create_mock_client`] returns a client together with the raw request receiver; the
//! `expect_*` functions pop the next request of a given kind so the test can inspect the payload
//! and answer it by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request of a given kind.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Query {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(expectations: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    expectations.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&expectations_clone).pop_front();
                answer(request, expectation);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

fn mismatch(request: &str) -> FrameworkError {
    FrameworkError::NotFound(format!("no expectation for {request} request"))
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            let response = if id == want {
                response
            } else {
                Err(mismatch(&format!("get {id}")))
            };
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            let response = if id == want {
                response
            } else {
                Err(mismatch(&format!("update {id}")))
            };
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Query { respond_to, .. }, Some(Expectation::Query { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, _) => {
            let _ = respond_to.send(Err(mismatch(&format!("get {id}"))));
        }
        (ResourceRequest::Create { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(mismatch("create")));
        }
        (ResourceRequest::Update { id, respond_to, .. }, _) => {
            let _ = respond_to.send(Err(mismatch(&format!("update {id}"))));
        }
        (ResourceRequest::Query { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(mismatch("query")));
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        lock(&self.expectations).push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, id: T::Id) {
        lock(&self.expectations).push_back(Expectation::Create { response: Ok(id) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    /// Sets the expectation to return the updated record.
    pub fn return_ok(self, value: T) {
        lock(&self.expectations).push_back(Expectation::Update {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> QueryExpectationBuilder<T> {
    /// Sets the expectation to return the given records.
    pub fn return_ok(self, values: Vec<T>) {
        lock(&self.expectations).push_back(Expectation::Query {
            response: Ok(values),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Query {
            response: Err(error),
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests; the test pops them with the `expect_*` helpers and replies
/// through the returned responder. Prefer [`MockClient`] unless the payload itself needs
/// inspecting.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Pops the next message if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Pops the next message if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Pops the next message if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Pops the next message if it is a Query request.
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Account {
        id: u32,
        email: String,
    }

    #[derive(Debug)]
    struct AccountCreate {
        email: String,
    }

    #[derive(Debug)]
    struct AccountUpdate {
        email: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Account error")]
    struct AccountError;

    #[async_trait]
    impl ActorEntity for Account {
        type Id = u32;
        type Create = AccountCreate;
        type Update = AccountUpdate;
        type Filter = String;
        type Context = ();
        type Error = AccountError;

        fn from_create_params(id: u32, params: AccountCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                email: params.email,
            })
        }

        async fn on_update(
            &mut self,
            update: AccountUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            self.email = update.email;
            Ok(())
        }

        fn matches(&self, domain: &String) -> bool {
            self.email.ends_with(domain.as_str())
        }
    }

    fn account(id: u32, email: &str) -> Account {
        Account {
            id,
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Account>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(AccountCreate {
                    email: "test@example.com".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.email, "test@example.com");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_query_payload_is_inspectable() {
        let (client, mut receiver) = create_mock_client::<Account>(10);

        let query_task = tokio::spawn(async move { client.query("example.com".to_string()).await });

        let (filter, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(filter, "example.com");
        responder
            .send(Ok(vec![account(4, "a@example.com")]))
            .unwrap();

        let found = query_task.await.unwrap().unwrap();
        assert_eq!(found, vec![account(4, "a@example.com")]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Account>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1)
            .return_ok(Some(account(1, "test@example.com")));
        mock.expect_update(1)
            .return_ok(account(1, "new@example.com"));
        mock.expect_query()
            .return_ok(vec![account(1, "new@example.com")]);

        let client = mock.client();

        let id = client
            .create(AccountCreate {
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        let updated = client
            .update(
                1,
                AccountUpdate {
                    email: "new@example.com".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "new@example.com");

        let listed = client.query("example.com".to_string()).await.unwrap();
        assert_eq!(listed.len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_answered_with_error() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_get(7).return_ok(None);

        let client = mock.client();

        // Wrong ID for the scripted get.
        let result = client.get(8).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(_))));

        // Nothing scripted at all.
        let result = client.query(String::new()).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_create().return_ok(1);
        mock.verify();
    }
}
