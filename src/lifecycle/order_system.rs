use crate::api::OrdersApi;
use crate::clients::{
    CustomerClient, LineItemClient, OrderClient, PaymentTypeClient, ProductClient,
};
use crate::config::OrdersConfig;
use crate::presenter::Presenter;
use crate::repository::ActorOrderRepository;
use crate::service::OrderService;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the order system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Injecting the clients each actor validates against
///
/// # Architecture
///
/// - **Customer Actor**: the customer directory
/// - **Product Actor**: the catalog
/// - **PaymentType Actor**: payment methods, checks owners against the Customer actor
/// - **Order Actor**: orders, one open cart per customer
/// - **Line item Actor**: cart contents, checks orders against the Order actor
///
/// On top of the actors sit the [`OrderService`], the [`Presenter`] and the [`OrdersApi`].
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&OrdersConfig::from_env()?);
///
/// let customer = system.customer_client.create_customer(params).await?;
/// let response = system.api.get_cart(customer).await;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub payment_type_client: PaymentTypeClient,
    pub order_client: OrderClient,
    pub line_item_client: LineItemClient,

    pub service: OrderService,
    pub presenter: Presenter,
    pub api: OrdersApi,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns every actor and wires the layers above them.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &OrdersConfig) -> Self {
        let buffer = config.actor_buffer;

        // 1. Create actors
        let (customer_actor, customer_client) = crate::customer_actor::new(buffer);
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (payment_type_actor, payment_type_client) = crate::payment_type_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);
        let (line_item_actor, line_item_client) = crate::line_item_actor::new(buffer);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(payment_type_actor.run(customer_client.clone())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(line_item_actor.run(order_client.clone())),
        ];

        // 3. Build the service layers
        let repository = Arc::new(ActorOrderRepository::new(
            order_client.clone(),
            line_item_client.clone(),
        ));
        let catalog = Arc::new(product_client.clone());
        let payment_types = Arc::new(payment_type_client.clone());

        let service = OrderService::new(
            repository.clone(),
            catalog.clone(),
            payment_types.clone(),
            config.ownership,
        );
        let presenter = Presenter::new(
            config.base_url.clone(),
            repository,
            Arc::new(customer_client.clone()),
            payment_types,
            catalog,
        );
        let api = OrdersApi::new(service.clone(), presenter.clone());

        info!(ownership = ?config.ownership, base_url = %config.base_url, "Order system started");

        Self {
            customer_client,
            product_client,
            payment_type_client,
            order_client,
            line_item_client,
            service,
            presenter,
            api,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the system's clients closes the actors' channels; each actor drains its queue
    /// and exits. Actors that hold another actor's client as context release it when they
    /// exit, so the order actor stops after the line item actor. Clones of the service, the
    /// presenter or the API still held elsewhere keep their actors alive and delay shutdown
    /// until they are dropped.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(SystemError)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        let Self {
            customer_client,
            product_client,
            payment_type_client,
            order_client,
            line_item_client,
            service,
            presenter,
            api,
            handles,
        } = self;
        drop(api);
        drop(presenter);
        drop(service);
        drop(line_item_client);
        drop(order_client);
        drop(payment_type_client);
        drop(product_client);
        drop(customer_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
