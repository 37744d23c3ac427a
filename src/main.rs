//! Demo: seeds a customer, two products and a payment method, then walks a cart from the first
//! item to a placed order through the API.

use cart_orders::config::OrdersConfig;
use cart_orders::lifecycle::{setup_tracing, OrderSystem};
use cart_orders::model::{CustomerCreate, PaymentTypeCreate, ProductCreate};
use cart_orders::service::Requester;
use serde_json::json;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = OrdersConfig::from_env()?;
    info!(?config, "Starting order system");
    let system = OrderSystem::new(&config);

    let span = tracing::info_span!("seeding");
    let (customer_id, kite, yoyo, visa) = async {
        let customer_id = system
            .customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await?;
        let kite = system
            .product_client
            .create_product(ProductCreate {
                name: "Kite".to_string(),
                price: 24.5,
                description: "Delta kite, ripstop nylon".to_string(),
            })
            .await?;
        let yoyo = system
            .product_client
            .create_product(ProductCreate {
                name: "Yo-yo".to_string(),
                price: 3.0,
                description: "Wooden".to_string(),
            })
            .await?;
        let visa = system
            .payment_type_client
            .create_payment_type(PaymentTypeCreate {
                customer_id,
                merchant_name: "Visa".to_string(),
                account_number: "4111111111111111".to_string(),
            })
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((customer_id, kite, yoyo, visa))
    }
    .instrument(span)
    .await?;
    info!(customer = %customer_id, "Seed data created");

    let span = tracing::info_span!("shopping", customer = %customer_id);
    async {
        for product in [kite, yoyo, kite] {
            let response = system
                .api
                .add_to_cart(customer_id, json!({ "product_id": product.0 }))
                .await;
            info!(status = response.status, "Added {product} to cart");
        }

        let cart = system.api.get_cart(customer_id).await;
        info!(status = cart.status, cart = %cart.body, "Cart");

        let open = system.api.list_open_orders(customer_id).await;
        let order_id = open.body[0]["id"].as_u64().unwrap_or_default().to_string();

        let placed = system
            .api
            .finalize_order(customer_id, &order_id, json!({ "payment_type_id": visa.0 }))
            .await;
        info!(status = placed.status, order = %order_id, "Checkout");

        let order = system.api.get_order(Requester::Staff, &order_id).await;
        info!(status = order.status, order = %order.body, "Placed order");
    }
    .instrument(span)
    .await;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
