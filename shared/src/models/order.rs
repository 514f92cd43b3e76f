//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Order line item (immutable once the order is created)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    /// Product name snapshot (for report display)
    pub product_name: Option<String>,
    pub quantity: i32,
    /// Unit price in currency unit
    pub unit_price: f64,
    /// Manual discount percentage (0-100)
    pub discount_percent: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Display label `ORD-<YYYYMMDD>-<4 digits>`, not guaranteed unique
    pub order_number: String,
    pub customer_id: String,
    /// Customer name snapshot (for report display)
    pub customer_name: Option<String>,
    pub company_id: String,
    pub dock_id: Option<String>,
    pub status: OrderStatus,
    /// Gross amount in currency unit, fixed at creation
    pub total_amount: f64,
    /// Discount amount in currency unit, fixed at creation
    pub total_discount: f64,
    pub notes: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Dock occupancy window (set when the order is scheduled onto a dock)
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// Line item input for order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: String,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub discount_percent: f64,
}

/// Create order payload (items are validated and totalled by the engine)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub items: Vec<OrderItemInput>,
    pub notes: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub dock_id: Option<String>,
}
