use crate::line_item_actor::LineItemError;
use crate::model::{LineItemCreate, LineItemFilter, LineItemId, OrderId, OrderLineItem};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the line item actor.
#[derive(Clone)]
pub struct LineItemClient {
    inner: ResourceClient<OrderLineItem>,
}

impl LineItemClient {
    pub fn new(inner: ResourceClient<OrderLineItem>) -> Self {
        Self { inner }
    }

    /// Attaches a product to an order. Fails with [`LineItemError::UnknownOrder`] when the
    /// order does not exist.
    #[instrument(skip(self))]
    pub async fn create_line_item(&self, params: LineItemCreate) -> Result<LineItemId, LineItemError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// All line items of an order, oldest first.
    #[instrument(skip(self))]
    pub async fn list_by_order(&self, order_id: OrderId) -> Result<Vec<OrderLineItem>, LineItemError> {
        debug!("Sending request");
        self.inner
            .query(LineItemFilter::ForOrder(order_id))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<OrderLineItem> for LineItemClient {
    type Error = LineItemError;

    fn inner(&self) -> &ResourceClient<OrderLineItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<LineItemError>() {
                Ok(err) => *err,
                Err(other) => LineItemError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => LineItemError::NotFound(id),
            other => LineItemError::ActorCommunicationError(other.to_string()),
        }
    }
}
