use crate::model::{PaymentType, PaymentTypeCreate, PaymentTypeId};
use crate::payment_type_actor::PaymentTypeError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the PaymentType actor.
#[derive(Clone)]
pub struct PaymentTypeClient {
    inner: ResourceClient<PaymentType>,
}

impl PaymentTypeClient {
    pub fn new(inner: ResourceClient<PaymentType>) -> Self {
        Self { inner }
    }

    /// Registers a payment method. Fails with
    /// [`PaymentTypeError::UnknownCustomer`] when the owner does not exist.
    #[instrument(skip(self))]
    pub async fn create_payment_type(
        &self,
        params: PaymentTypeCreate,
    ) -> Result<PaymentTypeId, PaymentTypeError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<PaymentType> for PaymentTypeClient {
    type Error = PaymentTypeError;

    fn inner(&self) -> &ResourceClient<PaymentType> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<PaymentTypeError>() {
                Ok(err) => *err,
                Err(other) => PaymentTypeError::ValidationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => PaymentTypeError::NotFound(id),
            other => PaymentTypeError::ActorCommunicationError(other.to_string()),
        }
    }
}
