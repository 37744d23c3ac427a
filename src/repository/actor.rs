//! Repository implementations backed by the actor clients.

use super::{
    CustomerDirectory, OrderRepository, PaymentTypeDirectory, ProductCatalog, RepositoryError,
};
use crate::clients::{
    CustomerClient, LineItemClient, OrderClient, PaymentTypeClient, ProductClient,
};
use crate::customer_actor::CustomerError;
use crate::line_item_actor::LineItemError;
use crate::model::{
    Customer, CustomerId, LineItemCreate, Order, OrderCreate, OrderId, OrderLineItem,
    OrderUpdate, PaymentType, PaymentTypeId, Product, ProductId,
};
use crate::order_actor::OrderError;
use crate::payment_type_actor::PaymentTypeError;
use crate::product_actor::ProductError;
use actor_framework::ActorClient;
use async_trait::async_trait;

/// [`OrderRepository`] over the order and line item actors.
#[derive(Clone)]
pub struct ActorOrderRepository {
    orders: OrderClient,
    line_items: LineItemClient,
}

impl ActorOrderRepository {
    pub fn new(orders: OrderClient, line_items: LineItemClient) -> Self {
        Self { orders, line_items }
    }
}

#[async_trait]
impl OrderRepository for ActorOrderRepository {
    async fn find_open_order_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.find_open_for_customer(customer_id).await?)
    }

    async fn create_order(&self, params: OrderCreate) -> Result<Order, RepositoryError> {
        let customer_id = params.customer_id;
        let id = self.orders.create_order(params).await?;
        Ok(Order::open(id, customer_id))
    }

    async fn update_order(&self, order: Order) -> Result<Order, RepositoryError> {
        Ok(self
            .orders
            .update_order(order.id, OrderUpdate::from(&order))
            .await?)
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.get(id).await?)
    }

    async fn create_line_item(
        &self,
        params: LineItemCreate,
    ) -> Result<OrderLineItem, RepositoryError> {
        let (order_id, product_id, customer_id) =
            (params.order_id, params.product_id, params.customer_id);
        let id = self.line_items.create_line_item(params).await?;
        Ok(OrderLineItem {
            id,
            order_id,
            product_id,
            customer_id,
        })
    }

    async fn list_line_items_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderLineItem>, RepositoryError> {
        Ok(self.line_items.list_by_order(order_id).await?)
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.get(id).await?)
    }
}

#[async_trait]
impl PaymentTypeDirectory for PaymentTypeClient {
    async fn get_payment_type(
        &self,
        id: PaymentTypeId,
    ) -> Result<Option<PaymentType>, RepositoryError> {
        Ok(self.get(id).await?)
    }
}

#[async_trait]
impl CustomerDirectory for CustomerClient {
    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.get(id).await?)
    }
}

impl From<OrderError> for RepositoryError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Conflict(msg) => RepositoryError::Conflict(msg),
            OrderError::NotFound(id) => RepositoryError::NotFound(id),
            OrderError::ValidationError(msg) => RepositoryError::Rejected(msg),
            OrderError::ActorCommunicationError(msg) => RepositoryError::Unavailable(msg),
        }
    }
}

impl From<LineItemError> for RepositoryError {
    fn from(e: LineItemError) -> Self {
        match e {
            LineItemError::NotFound(id) => RepositoryError::NotFound(id),
            LineItemError::UnknownOrder(id) => {
                RepositoryError::Rejected(format!("unknown order {id}"))
            }
            LineItemError::OrderNotOpen(msg) => RepositoryError::Conflict(msg),
            LineItemError::ActorCommunicationError(msg) => RepositoryError::Unavailable(msg),
        }
    }
}

impl From<ProductError> for RepositoryError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => RepositoryError::NotFound(id),
            ProductError::ValidationError(msg) => RepositoryError::Rejected(msg),
            ProductError::ActorCommunicationError(msg) => RepositoryError::Unavailable(msg),
        }
    }
}

impl From<PaymentTypeError> for RepositoryError {
    fn from(e: PaymentTypeError) -> Self {
        match e {
            PaymentTypeError::NotFound(id) => RepositoryError::NotFound(id),
            PaymentTypeError::UnknownCustomer(id) => {
                RepositoryError::Rejected(format!("unknown customer {id}"))
            }
            PaymentTypeError::ValidationError(msg) => RepositoryError::Rejected(msg),
            PaymentTypeError::ActorCommunicationError(msg) => RepositoryError::Unavailable(msg),
        }
    }
}

impl From<CustomerError> for RepositoryError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::NotFound(id) => RepositoryError::NotFound(id),
            CustomerError::ValidationError(msg) => RepositoryError::Rejected(msg),
            CustomerError::ActorCommunicationError(msg) => RepositoryError::Unavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    #[tokio::test]
    async fn test_create_order_returns_open_order() {
        let mut orders = MockClient::<Order>::new();
        let line_items = MockClient::<OrderLineItem>::new();
        orders.expect_create().return_ok(OrderId(4));

        let repo = ActorOrderRepository::new(
            OrderClient::new(orders.client()),
            LineItemClient::new(line_items.client()),
        );
        let order = repo
            .create_order(OrderCreate {
                customer_id: CustomerId(2),
            })
            .await
            .unwrap();
        assert_eq!(order, Order::open(OrderId(4), CustomerId(2)));
        orders.verify();
    }

    #[tokio::test]
    async fn test_store_errors_are_classified() {
        let mut orders = MockClient::<Order>::new();
        let line_items = MockClient::<OrderLineItem>::new();
        orders
            .expect_create()
            .return_err(FrameworkError::Conflict("order_2 conflicts with existing order_1".into()));
        orders
            .expect_update(OrderId(9))
            .return_err(FrameworkError::NotFound("order_9".into()));
        orders
            .expect_get(OrderId(1))
            .return_err(FrameworkError::ActorClosed);

        let repo = ActorOrderRepository::new(
            OrderClient::new(orders.client()),
            LineItemClient::new(line_items.client()),
        );

        let created = repo
            .create_order(OrderCreate {
                customer_id: CustomerId(1),
            })
            .await;
        assert!(matches!(created, Err(RepositoryError::Conflict(_))));

        let placed = Order {
            id: OrderId(9),
            customer_id: CustomerId(1),
            payment_type_id: Some(PaymentTypeId(1)),
        };
        assert_eq!(
            repo.update_order(placed).await,
            Err(RepositoryError::NotFound("order_9".to_string()))
        );

        assert!(matches!(
            repo.get_order(OrderId(1)).await,
            Err(RepositoryError::Unavailable(_))
        ));
        orders.verify();
    }
}
