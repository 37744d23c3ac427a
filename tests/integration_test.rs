use cart_orders::config::OrdersConfig;
use cart_orders::lifecycle::OrderSystem;
use cart_orders::model::{
    CustomerCreate, CustomerId, LineItemCreate, OrderId, PaymentTypeCreate, PaymentTypeId,
    ProductCreate, ProductId,
};
use cart_orders::repository::{ActorOrderRepository, OrderRepository, RepositoryError};
use cart_orders::service::{OrderServiceError, OwnershipPolicy, Requester};
use std::collections::HashSet;

// --- Fixtures ---

struct Shop {
    system: OrderSystem,
    alice: CustomerId,
    bob: CustomerId,
    kite: ProductId,
    yoyo: ProductId,
    alice_visa: PaymentTypeId,
    bob_amex: PaymentTypeId,
}

async fn shop(ownership: OwnershipPolicy) -> Shop {
    let config = OrdersConfig {
        ownership,
        ..OrdersConfig::default()
    };
    let system = OrderSystem::new(&config);

    let alice = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap();
    let bob = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        })
        .await
        .unwrap();
    let kite = system
        .product_client
        .create_product(ProductCreate {
            name: "Kite".to_string(),
            price: 24.5,
            description: "Delta kite".to_string(),
        })
        .await
        .unwrap();
    let yoyo = system
        .product_client
        .create_product(ProductCreate {
            name: "Yo-yo".to_string(),
            price: 3.0,
            description: "Wooden".to_string(),
        })
        .await
        .unwrap();
    let alice_visa = system
        .payment_type_client
        .create_payment_type(PaymentTypeCreate {
            customer_id: alice,
            merchant_name: "Visa".to_string(),
            account_number: "4111111111111111".to_string(),
        })
        .await
        .unwrap();
    let bob_amex = system
        .payment_type_client
        .create_payment_type(PaymentTypeCreate {
            customer_id: bob,
            merchant_name: "Amex".to_string(),
            account_number: "378282246310005".to_string(),
        })
        .await
        .unwrap();

    Shop {
        system,
        alice,
        bob,
        kite,
        yoyo,
        alice_visa,
        bob_amex,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_get_or_create_returns_same_open_order() {
    let shop = shop(OwnershipPolicy::Enforced).await;
    let service = &shop.system.service;

    let first = service.get_or_create_open_order(shop.alice).await.unwrap();
    let second = service.get_or_create_open_order(shop.alice).await.unwrap();
    assert_eq!(first.id, second.id);
    assert!(first.is_open());

    let other = service.get_or_create_open_order(shop.bob).await.unwrap();
    assert_ne!(other.id, first.id);

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_accumulates_line_items() {
    let shop = shop(OwnershipPolicy::Enforced).await;
    let service = &shop.system.service;

    let first = service.add_product_to_cart(shop.alice, shop.kite).await.unwrap();
    let second = service.add_product_to_cart(shop.alice, shop.yoyo).await.unwrap();
    let third = service.add_product_to_cart(shop.alice, shop.kite).await.unwrap();
    assert_eq!(first.order_id, second.order_id);
    assert_eq!(first.order_id, third.order_id);

    let line_items = service.line_items(first.order_id).await.unwrap();
    assert_eq!(line_items.len(), 3);

    let cart = service.get_cart(shop.alice).await.unwrap();
    let names: Vec<_> = cart.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Kite", "Yo-yo"]);

    assert!(service.get_cart(shop.bob).await.unwrap().is_empty());

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_finalize_then_next_add_opens_new_order() {
    let shop = shop(OwnershipPolicy::Enforced).await;
    let service = &shop.system.service;

    let item = service.add_product_to_cart(shop.alice, shop.kite).await.unwrap();
    let placed = service
        .finalize_order(shop.alice, item.order_id, Some(shop.alice_visa))
        .await
        .unwrap();
    assert_eq!(placed.payment_type_id, Some(shop.alice_visa));
    assert!(service
        .list_open_order_for_customer(shop.alice)
        .await
        .unwrap()
        .is_empty());
    assert!(service.get_cart(shop.alice).await.unwrap().is_empty());

    let next = service.add_product_to_cart(shop.alice, shop.yoyo).await.unwrap();
    assert_ne!(next.order_id, item.order_id);

    let open = service.list_open_order_for_customer(shop.alice).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, next.order_id);

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_line_items_only_attach_to_own_open_cart() {
    let shop = shop(OwnershipPolicy::Unrestricted).await;
    let service = &shop.system.service;
    let repository = ActorOrderRepository::new(
        shop.system.order_client.clone(),
        shop.system.line_item_client.clone(),
    );

    let cart = service.get_or_create_open_order(shop.alice).await.unwrap();

    let foreign = repository
        .create_line_item(LineItemCreate {
            order_id: cart.id,
            product_id: shop.kite,
            customer_id: shop.bob,
        })
        .await;
    assert!(matches!(foreign, Err(RepositoryError::Conflict(_))));

    service
        .finalize_order(shop.alice, cart.id, Some(shop.alice_visa))
        .await
        .unwrap();
    let placed = repository
        .create_line_item(LineItemCreate {
            order_id: cart.id,
            product_id: shop.kite,
            customer_id: shop.alice,
        })
        .await;
    assert!(matches!(placed, Err(RepositoryError::Conflict(_))));
    assert!(service.line_items(cart.id).await.unwrap().is_empty());

    // The service path lands in a fresh cart instead.
    let item = service.add_product_to_cart(shop.alice, shop.kite).await.unwrap();
    assert_ne!(item.order_id, cart.id);
    assert_eq!(item.customer_id, shop.alice);

    drop(repository);
    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_product_creates_nothing() {
    let shop = shop(OwnershipPolicy::Enforced).await;
    let service = &shop.system.service;

    let result = service.add_product_to_cart(shop.alice, ProductId(999)).await;
    assert_eq!(
        result,
        Err(OrderServiceError::NotFound("product_999".to_string()))
    );
    assert!(service
        .list_open_order_for_customer(shop.alice)
        .await
        .unwrap()
        .is_empty());

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_finalize_validation() {
    let shop = shop(OwnershipPolicy::Enforced).await;
    let service = &shop.system.service;
    let order = service.get_or_create_open_order(shop.alice).await.unwrap();

    let result = service.finalize_order(shop.alice, order.id, None).await;
    assert!(matches!(result, Err(OrderServiceError::InvalidArgument(_))));
    let unchanged = service
        .get_order_by_id(Requester::Customer(shop.alice), order.id)
        .await
        .unwrap();
    assert!(unchanged.is_open());

    let result = service
        .finalize_order(shop.alice, OrderId(999), Some(shop.alice_visa))
        .await;
    assert!(matches!(result, Err(OrderServiceError::NotFound(_))));

    let result = service
        .finalize_order(shop.alice, order.id, Some(PaymentTypeId(999)))
        .await;
    assert!(matches!(result, Err(OrderServiceError::NotFound(_))));

    let result = service
        .finalize_order(shop.alice, order.id, Some(shop.bob_amex))
        .await;
    assert!(matches!(result, Err(OrderServiceError::PermissionDenied(_))));

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ownership_enforced() {
    let shop = shop(OwnershipPolicy::Enforced).await;
    let service = &shop.system.service;
    let order = service.get_or_create_open_order(shop.alice).await.unwrap();

    let result = service
        .get_order_by_id(Requester::Customer(shop.bob), order.id)
        .await;
    assert!(matches!(result, Err(OrderServiceError::PermissionDenied(_))));

    let result = service
        .finalize_order(shop.bob, order.id, Some(shop.bob_amex))
        .await;
    assert!(matches!(result, Err(OrderServiceError::PermissionDenied(_))));

    let as_staff = service
        .get_order_by_id(Requester::Staff, order.id)
        .await
        .unwrap();
    assert_eq!(as_staff.customer_id, shop.alice);

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ownership_unrestricted() {
    let shop = shop(OwnershipPolicy::Unrestricted).await;
    let service = &shop.system.service;
    let order = service.get_or_create_open_order(shop.alice).await.unwrap();

    service
        .get_order_by_id(Requester::Customer(shop.bob), order.id)
        .await
        .unwrap();

    // Finalizing hands the order to the acting customer.
    let placed = service
        .finalize_order(shop.bob, order.id, Some(shop.bob_amex))
        .await
        .unwrap();
    assert_eq!(placed.customer_id, shop.bob);
    assert_eq!(placed.payment_type_id, Some(shop.bob_amex));

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_adds_share_one_order() {
    let shop = shop(OwnershipPolicy::Enforced).await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = shop.system.service.clone();
        let (customer, product) = (shop.alice, if i % 2 == 0 { shop.kite } else { shop.yoyo });
        handles.push(tokio::spawn(async move {
            service.add_product_to_cart(customer, product).await
        }));
    }

    let mut orders = HashSet::new();
    for handle in handles {
        let item = handle.await.unwrap().unwrap();
        orders.insert(item.order_id);
    }
    assert_eq!(orders.len(), 1);

    let service = &shop.system.service;
    let open = service.list_open_order_for_customer(shop.alice).await.unwrap();
    assert_eq!(open.len(), 1);
    assert!(orders.contains(&open[0].id));
    assert_eq!(service.line_items(open[0].id).await.unwrap().len(), 16);

    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_completes() {
    let shop = shop(OwnershipPolicy::Enforced).await;
    shop.system
        .service
        .add_product_to_cart(shop.alice, shop.kite)
        .await
        .unwrap();
    shop.system.shutdown().await.unwrap();
}
