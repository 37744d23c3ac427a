use super::{OrderServiceError, OwnershipPolicy, Requester};
use crate::model::{
    CustomerId, LineItemCreate, Order, OrderCreate, OrderId, OrderLineItem, PaymentTypeId,
    Product, ProductId,
};
use crate::repository::{OrderRepository, PaymentTypeDirectory, ProductCatalog, RepositoryError};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The cart and order lifecycle.
///
/// Every operation takes the acting customer explicitly. The service holds no state of its own;
/// clones share the same stores.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    catalog: Arc<dyn ProductCatalog>,
    payment_types: Arc<dyn PaymentTypeDirectory>,
    policy: OwnershipPolicy,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        catalog: Arc<dyn ProductCatalog>,
        payment_types: Arc<dyn PaymentTypeDirectory>,
        policy: OwnershipPolicy,
    ) -> Self {
        Self {
            orders,
            catalog,
            payment_types,
            policy,
        }
    }

    pub fn policy(&self) -> OwnershipPolicy {
        self.policy
    }

    /// Returns the customer's open order, creating it if there is none.
    ///
    /// The order store rejects a second open order for the same customer, so when two calls
    /// race, the loser's create fails with a conflict and the lookup is repeated once to pick
    /// up the winner's order.
    #[instrument(skip(self), fields(customer = %customer_id))]
    pub async fn get_or_create_open_order(
        &self,
        customer_id: CustomerId,
    ) -> Result<Order, OrderServiceError> {
        Ok(self.open_order(customer_id).await?)
    }

    async fn open_order(&self, customer_id: CustomerId) -> Result<Order, RepositoryError> {
        if let Some(order) = self.orders.find_open_order_by_customer(customer_id).await? {
            return Ok(order);
        }

        match self.orders.create_order(OrderCreate { customer_id }).await {
            Ok(order) => {
                info!(order = %order.id, "Opened cart");
                Ok(order)
            }
            Err(RepositoryError::Conflict(reason)) => {
                warn!(%reason, "Cart opened concurrently, retrying lookup");
                self.orders
                    .find_open_order_by_customer(customer_id)
                    .await?
                    .ok_or(RepositoryError::Conflict(reason))
            }
            Err(e) => Err(e),
        }
    }

    /// Adds one unit of a product to the customer's cart.
    ///
    /// The product is checked first, so an unknown product leaves no empty cart behind. When the
    /// cart is placed between the lookup and the insert, the line item store rejects the item and
    /// the add is repeated once against the customer's new cart.
    #[instrument(skip(self), fields(customer = %customer_id, product = %product_id))]
    pub async fn add_product_to_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<OrderLineItem, OrderServiceError> {
        if self.catalog.get_product(product_id).await?.is_none() {
            return Err(OrderServiceError::NotFound(product_id.to_string()));
        }

        let line_item = match self.attach(customer_id, product_id).await {
            Err(RepositoryError::Conflict(reason)) => {
                warn!(%reason, "Cart placed concurrently, retrying add");
                self.attach(customer_id, product_id).await?
            }
            result => result?,
        };
        info!(order = %line_item.order_id, line_item = %line_item.id, "Added to cart");
        Ok(line_item)
    }

    async fn attach(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<OrderLineItem, RepositoryError> {
        let order = self.open_order(customer_id).await?;
        self.orders
            .create_line_item(LineItemCreate {
                order_id: order.id,
                product_id,
                customer_id,
            })
            .await
    }

    /// Places an order by attaching a payment type.
    ///
    /// Checks run in this order: payment type present, order exists, order owned by the
    /// acting customer, payment type exists, payment type owned by the acting customer. The
    /// ownership checks are skipped under [`OwnershipPolicy::Unrestricted`]. Finalizing an
    /// already placed order replaces its payment type.
    #[instrument(skip(self), fields(customer = %customer_id, order = %order_id))]
    pub async fn finalize_order(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
        payment_type_id: Option<PaymentTypeId>,
    ) -> Result<Order, OrderServiceError> {
        let payment_type_id = payment_type_id.ok_or_else(|| {
            OrderServiceError::InvalidArgument("payment_type_id is required".to_string())
        })?;

        let order = self
            .orders
            .get_order(order_id)
            .await?
            .ok_or_else(|| OrderServiceError::NotFound(order_id.to_string()))?;
        if !self.policy.may_modify(customer_id, order.customer_id) {
            warn!(owner = %order.customer_id, "Finalize of foreign order denied");
            return Err(OrderServiceError::PermissionDenied(order_id.to_string()));
        }

        let payment_type = self
            .payment_types
            .get_payment_type(payment_type_id)
            .await?
            .ok_or_else(|| OrderServiceError::NotFound(payment_type_id.to_string()))?;
        if !self.policy.may_modify(customer_id, payment_type.customer_id) {
            warn!(payment_type = %payment_type_id, "Foreign payment type denied");
            return Err(OrderServiceError::PermissionDenied(
                payment_type_id.to_string(),
            ));
        }

        let placed = self
            .orders
            .update_order(Order {
                customer_id,
                payment_type_id: Some(payment_type_id),
                ..order
            })
            .await?;
        info!(payment_type = %payment_type_id, "Order placed");
        Ok(placed)
    }

    #[instrument(skip(self))]
    pub async fn get_order_by_id(
        &self,
        requester: Requester,
        order_id: OrderId,
    ) -> Result<Order, OrderServiceError> {
        let order = self
            .orders
            .get_order(order_id)
            .await?
            .ok_or_else(|| OrderServiceError::NotFound(order_id.to_string()))?;
        if !self.policy.may_read(requester, order.customer_id) {
            warn!(owner = %order.customer_id, "Read of foreign order denied");
            return Err(OrderServiceError::PermissionDenied(order_id.to_string()));
        }
        Ok(order)
    }

    /// The customer's open order as a list of zero or one elements.
    #[instrument(skip(self), fields(customer = %customer_id))]
    pub async fn list_open_order_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, OrderServiceError> {
        Ok(self
            .orders
            .find_open_order_by_customer(customer_id)
            .await?
            .into_iter()
            .collect())
    }

    /// Distinct products in the customer's cart, in the order they were first added.
    ///
    /// Empty when the customer has no open order.
    #[instrument(skip(self), fields(customer = %customer_id))]
    pub async fn get_cart(&self, customer_id: CustomerId) -> Result<Vec<Product>, OrderServiceError> {
        let Some(order) = self.orders.find_open_order_by_customer(customer_id).await? else {
            return Ok(Vec::new());
        };

        let line_items = self.orders.list_line_items_by_order(order.id).await?;
        let mut seen = HashSet::new();
        let mut products = Vec::new();
        for item in line_items {
            if !seen.insert(item.product_id) {
                continue;
            }
            match self.catalog.get_product(item.product_id).await? {
                Some(product) => products.push(product),
                None => warn!(product = %item.product_id, line_item = %item.id, "Cart product missing from catalog"),
            }
        }
        Ok(products)
    }

    /// Line items of an order, for display.
    pub async fn line_items(&self, order_id: OrderId) -> Result<Vec<OrderLineItem>, OrderServiceError> {
        Ok(self.orders.list_line_items_by_order(order_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{LineItemClient, OrderClient, PaymentTypeClient, ProductClient};
    use crate::line_item_actor::LineItemError;
    use crate::model::{LineItemId, PaymentType};
    use crate::repository::ActorOrderRepository;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    struct Mocks {
        orders: MockClient<Order>,
        line_items: MockClient<OrderLineItem>,
        products: MockClient<Product>,
        payment_types: MockClient<PaymentType>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                orders: MockClient::new(),
                line_items: MockClient::new(),
                products: MockClient::new(),
                payment_types: MockClient::new(),
            }
        }

        fn service(&self, policy: OwnershipPolicy) -> OrderService {
            let repo = ActorOrderRepository::new(
                OrderClient::new(self.orders.client()),
                LineItemClient::new(self.line_items.client()),
            );
            OrderService::new(
                Arc::new(repo),
                Arc::new(ProductClient::new(self.products.client())),
                Arc::new(PaymentTypeClient::new(self.payment_types.client())),
                policy,
            )
        }

        fn verify(&self) {
            self.orders.verify();
            self.line_items.verify();
            self.products.verify();
            self.payment_types.verify();
        }
    }

    fn conflict() -> FrameworkError {
        FrameworkError::Conflict("order_2 conflicts with existing order_1".to_string())
    }

    #[tokio::test]
    async fn test_conflict_on_create_returns_winner() {
        let mut mocks = Mocks::new();
        let winner = Order::open(OrderId(1), CustomerId(5));
        mocks.orders.expect_query().return_ok(vec![]);
        mocks.orders.expect_create().return_err(conflict());
        mocks.orders.expect_query().return_ok(vec![winner.clone()]);

        let order = mocks
            .service(OwnershipPolicy::Enforced)
            .get_or_create_open_order(CustomerId(5))
            .await
            .unwrap();
        assert_eq!(order, winner);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_conflict_without_winner_is_storage_error() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_query().return_ok(vec![]);
        mocks.orders.expect_create().return_err(conflict());
        mocks.orders.expect_query().return_ok(vec![]);

        let result = mocks
            .service(OwnershipPolicy::Enforced)
            .get_or_create_open_order(CustomerId(5))
            .await;
        assert!(matches!(
            result,
            Err(OrderServiceError::Storage(RepositoryError::Conflict(_)))
        ));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_add_retries_once_when_cart_was_placed() {
        let mut mocks = Mocks::new();
        mocks
            .products
            .expect_get(ProductId(2))
            .return_ok(Some(Product::new(ProductId(2), "Kite", 24.5, "")));
        mocks
            .orders
            .expect_query()
            .return_ok(vec![Order::open(OrderId(1), CustomerId(5))]);
        mocks
            .line_items
            .expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                LineItemError::OrderNotOpen("order_1 is not an open cart of customer_5".into()),
            )));
        mocks
            .orders
            .expect_query()
            .return_ok(vec![Order::open(OrderId(2), CustomerId(5))]);
        mocks.line_items.expect_create().return_ok(LineItemId(7));

        let item = mocks
            .service(OwnershipPolicy::Enforced)
            .add_product_to_cart(CustomerId(5), ProductId(2))
            .await
            .unwrap();
        assert_eq!(item.id, LineItemId(7));
        assert_eq!(item.order_id, OrderId(2));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_add_gives_up_after_second_rejection() {
        let mut mocks = Mocks::new();
        mocks
            .products
            .expect_get(ProductId(2))
            .return_ok(Some(Product::new(ProductId(2), "Kite", 24.5, "")));
        for order in [1, 2] {
            mocks
                .orders
                .expect_query()
                .return_ok(vec![Order::open(OrderId(order), CustomerId(5))]);
            mocks
                .line_items
                .expect_create()
                .return_err(FrameworkError::EntityError(Box::new(
                    LineItemError::OrderNotOpen(format!("order_{order} is placed")),
                )));
        }

        let result = mocks
            .service(OwnershipPolicy::Enforced)
            .add_product_to_cart(CustomerId(5), ProductId(2))
            .await;
        assert!(matches!(
            result,
            Err(OrderServiceError::Storage(RepositoryError::Conflict(_)))
        ));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_unknown_product_touches_no_order() {
        let mut mocks = Mocks::new();
        mocks.products.expect_get(ProductId(9)).return_ok(None);

        let result = mocks
            .service(OwnershipPolicy::Enforced)
            .add_product_to_cart(CustomerId(1), ProductId(9))
            .await;
        assert_eq!(
            result,
            Err(OrderServiceError::NotFound("product_9".to_string()))
        );
        mocks.verify();
    }

    #[tokio::test]
    async fn test_finalize_requires_payment_type_before_lookup() {
        let mocks = Mocks::new();
        let result = mocks
            .service(OwnershipPolicy::Enforced)
            .finalize_order(CustomerId(1), OrderId(1), None)
            .await;
        assert!(matches!(result, Err(OrderServiceError::InvalidArgument(_))));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_finalize_with_foreign_payment_type_is_denied() {
        let mut mocks = Mocks::new();
        mocks
            .orders
            .expect_get(OrderId(3))
            .return_ok(Some(Order::open(OrderId(3), CustomerId(1))));
        mocks
            .payment_types
            .expect_get(PaymentTypeId(7))
            .return_ok(Some(PaymentType {
                id: PaymentTypeId(7),
                customer_id: CustomerId(2),
                merchant_name: "Visa".to_string(),
                account_number: "4111111111111111".to_string(),
            }));

        let result = mocks
            .service(OwnershipPolicy::Enforced)
            .finalize_order(CustomerId(1), OrderId(3), Some(PaymentTypeId(7)))
            .await;
        assert_eq!(
            result,
            Err(OrderServiceError::PermissionDenied(
                "payment_type_7".to_string()
            ))
        );
        mocks.verify();
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut mocks = Mocks::new();
        mocks
            .orders
            .expect_query()
            .return_err(FrameworkError::ActorDropped);

        let result = mocks
            .service(OwnershipPolicy::Enforced)
            .get_cart(CustomerId(1))
            .await;
        assert!(matches!(
            result,
            Err(OrderServiceError::Storage(RepositoryError::Unavailable(_)))
        ));
        mocks.verify();
    }
}
