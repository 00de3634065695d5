//! Order domain entity, filter types and DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Processing" => Ok(OrderStatus::Processing),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::invalid_argument(format!(
                "unknown order status `{}`",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single order line; the product name is a snapshot taken at order
/// time, the line total is derived rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Shipping destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Order domain entity.
///
/// `order_ownership_id` is the seller-side party the order is attributed
/// to, distinct from the buying customer's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_id: String,
    pub order_ownership_id: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub total_price: Decimal,
    pub shipping_address: Address,
    pub status: OrderStatus,
}

/// Incoming order payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDraft {
    pub customer_id: String,
    pub order_ownership_id: String,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub total_price: Decimal,
    pub shipping_address: Address,
    pub status: OrderStatus,
}

impl OrderDraft {
    /// Materialize the draft into an order with the given id.
    pub fn into_order(self, id: String, order_date: DateTime<Utc>) -> Order {
        Order {
            id,
            customer_id: self.customer_id,
            order_ownership_id: self.order_ownership_id,
            order_date,
            order_items: self.order_items,
            total_price: self.total_price,
            shipping_address: self.shipping_address,
            status: self.status,
        }
    }
}

/// Raw filter parameters as they arrive from the caller; the status is
/// still a string at this point.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub seller_id: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Typed, validated order filter; every present field narrows the
/// result set, the date range is inclusive of start and exclusive of
/// end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub seller_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
