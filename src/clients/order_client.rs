use crate::model::{CustomerId, Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// A create or update that would give a customer a second open order fails with
/// [`OrderError::Conflict`].
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Returns the customer's open order, if there is one.
    #[instrument(skip(self))]
    pub async fn find_open_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        let orders = self
            .inner
            .query(OrderFilter::OpenFor(customer_id))
            .await
            .map_err(Self::map_error)?;
        Ok(orders.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ValidationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Conflict(msg) => OrderError::Conflict(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
