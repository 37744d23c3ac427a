//! # Orders API
//!
//! Transport-agnostic handlers. Each takes the resolved caller plus the raw request data,
//! calls the service, shapes the result with the [`Presenter`] and returns an
//! [`ApiResponse`] carrying an HTTP status code and a JSON body.
//!
//! | Operation | Success | Failures |
//! |-----------|---------|----------|
//! | [`get_order`](OrdersApi::get_order) | 200 order | 404, 403 |
//! | [`add_to_cart`](OrdersApi::add_to_cart) | 201 cart item | 404, 400 |
//! | [`finalize_order`](OrdersApi::finalize_order) | 204, empty body | 404, 400, 403 |
//! | [`list_open_orders`](OrdersApi::list_open_orders) | 200 `[order]` | |
//! | [`get_cart`](OrdersApi::get_cart) | 200 `[product]` | |
//!
//! Storage failures become a 500 with a fixed message; the details are only logged.

use crate::model::{CustomerId, OrderId, PaymentTypeId, ProductId};
use crate::presenter::{PresentError, Presenter};
use crate::service::{OrderService, OrderServiceError, Requester};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::Display;
use tracing::{error, instrument};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_FORBIDDEN: u16 = 403;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// A status code and JSON body. A 204 carries `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(e) => internal_error(e),
        }
    }

    fn no_content() -> Self {
        Self {
            status: STATUS_NO_CONTENT,
            body: Value::Null,
        }
    }

    fn error(status: u16, message: impl Display) -> Self {
        Self {
            status,
            body: json!({ "error": message.to_string() }),
        }
    }
}

fn internal_error(detail: impl Display) -> ApiResponse {
    error!(%detail, "Request failed");
    ApiResponse::error(STATUS_INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
}

impl From<OrderServiceError> for ApiResponse {
    fn from(e: OrderServiceError) -> Self {
        match e {
            OrderServiceError::NotFound(_) => ApiResponse::error(STATUS_NOT_FOUND, e),
            OrderServiceError::InvalidArgument(_) => ApiResponse::error(STATUS_BAD_REQUEST, e),
            OrderServiceError::PermissionDenied(_) => ApiResponse::error(STATUS_FORBIDDEN, e),
            OrderServiceError::Storage(_) => internal_error(e),
        }
    }
}

impl From<PresentError> for ApiResponse {
    fn from(e: PresentError) -> Self {
        internal_error(e)
    }
}

/// An identifier as clients send it: a bare number or a string such as `"7"` or `"order_7"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u32),
    Text(String),
}

impl RawId {
    /// Parses the identifier. `Ok(None)` for an empty string.
    fn parse<I>(&self) -> Result<Option<I>, OrderServiceError>
    where
        I: From<u32> + std::str::FromStr,
        I::Err: Display,
    {
        match self {
            RawId::Number(n) => Ok(Some(I::from(*n))),
            RawId::Text(s) if s.trim().is_empty() => Ok(None),
            RawId::Text(s) => s
                .parse()
                .map(Some)
                .map_err(|e: I::Err| OrderServiceError::InvalidArgument(e.to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: Option<RawId>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FinalizeOrderRequest {
    pub payment_type_id: Option<RawId>,
}

fn parse_body<T: for<'de> Deserialize<'de>>(body: Value) -> Result<T, OrderServiceError> {
    serde_json::from_value(body)
        .map_err(|e| OrderServiceError::InvalidArgument(format!("malformed body: {e}")))
}

/// An unparseable path ID names no order.
fn parse_order_id(raw: &str) -> Result<OrderId, OrderServiceError> {
    raw.parse()
        .map_err(|_| OrderServiceError::NotFound(format!("order {raw:?}")))
}

#[derive(Clone)]
pub struct OrdersApi {
    service: OrderService,
    presenter: Presenter,
}

impl OrdersApi {
    pub fn new(service: OrderService, presenter: Presenter) -> Self {
        Self { service, presenter }
    }

    /// `GET /orders/{id}`
    #[instrument(skip(self))]
    pub async fn get_order(&self, requester: Requester, order_id: &str) -> ApiResponse {
        let order = match parse_order_id(order_id) {
            Ok(id) => self.service.get_order_by_id(requester, id).await,
            Err(e) => Err(e),
        };
        match order {
            Ok(order) => match self.presenter.order_view(&order).await {
                Ok(view) => ApiResponse::json(STATUS_OK, &view),
                Err(e) => e.into(),
            },
            Err(e) => e.into(),
        }
    }

    /// `POST /orders` with `{ "product_id": … }`
    #[instrument(skip(self, body))]
    pub async fn add_to_cart(&self, customer_id: CustomerId, body: Value) -> ApiResponse {
        let product_id = parse_body::<AddToCartRequest>(body).and_then(|request| {
            request
                .product_id
                .as_ref()
                .map(RawId::parse::<ProductId>)
                .transpose()
                .map(Option::flatten)?
                .ok_or_else(|| OrderServiceError::InvalidArgument("product_id is required".into()))
        });
        let line_item = match product_id {
            Ok(product_id) => self.service.add_product_to_cart(customer_id, product_id).await,
            Err(e) => Err(e),
        };
        match line_item {
            Ok(item) => match self.presenter.cart_item_view(&item).await {
                Ok(view) => ApiResponse::json(STATUS_CREATED, &view),
                Err(e) => e.into(),
            },
            Err(e) => e.into(),
        }
    }

    /// `PUT /orders/{id}` with `{ "payment_type_id": … }`
    #[instrument(skip(self, body))]
    pub async fn finalize_order(
        &self,
        customer_id: CustomerId,
        order_id: &str,
        body: Value,
    ) -> ApiResponse {
        let payment_type_id = parse_body::<FinalizeOrderRequest>(body).and_then(|request| {
            request
                .payment_type_id
                .as_ref()
                .map(RawId::parse::<PaymentTypeId>)
                .transpose()
                .map(Option::flatten)
        });
        let result = match (payment_type_id, parse_order_id(order_id)) {
            (Ok(payment_type_id), Ok(order_id)) => {
                self.service
                    .finalize_order(customer_id, order_id, payment_type_id)
                    .await
            }
            // Missing payment type reports before an unknown order.
            (Ok(None), Err(_)) => Err(OrderServiceError::InvalidArgument(
                "payment_type_id is required".to_string(),
            )),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        match result {
            Ok(_) => ApiResponse::no_content(),
            Err(e) => e.into(),
        }
    }

    /// `GET /orders`: the caller's open order, as a list of zero or one.
    #[instrument(skip(self))]
    pub async fn list_open_orders(&self, customer_id: CustomerId) -> ApiResponse {
        let orders = match self.service.list_open_order_for_customer(customer_id).await {
            Ok(orders) => orders,
            Err(e) => return e.into(),
        };
        let mut views = Vec::with_capacity(orders.len());
        for order in &orders {
            match self.presenter.order_view(order).await {
                Ok(view) => views.push(view),
                Err(e) => return e.into(),
            }
        }
        ApiResponse::json(STATUS_OK, &views)
    }

    /// `GET /orders/cart`
    #[instrument(skip(self))]
    pub async fn get_cart(&self, customer_id: CustomerId) -> ApiResponse {
        match self.service.get_cart(customer_id).await {
            Ok(products) => ApiResponse::json(STATUS_OK, &products),
            Err(e) => e.into(),
        }
    }
}
