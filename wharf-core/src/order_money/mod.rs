//! Money calculation for order creation using rust_decimal for precision
//!
//! All accumulation is done using `Decimal` internally, then converted to
//! `f64` once at the boundary (2 decimal places, half-up). Both totals and
//! the discount authorization run synchronously before the order is
//! persisted; the caller guarantees the item list it persists is the one
//! totalled here.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderCreate, OrderItem, OrderItemInput, OrderStatus, User};
use shared::util;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per item
const MAX_UNIT_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
const MAX_QUANTITY: i32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field_name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values are validated finite at the boundary. If NaN/Infinity somehow
/// reaches here, logs an error and returns ZERO to avoid silent data
/// corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // Decimal rounded to 2dp with inputs bounded at the boundary is
        // always representable as f64
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Validate a proposed line-item discount against the acting user's ceiling.
///
/// Accepts iff `requested <= max_allowed`. Runs independently per line item;
/// there is no order-level discount cap. Pure predicate, no side effects.
pub fn authorize_discount(requested: f64, max_allowed: f64) -> AppResult<()> {
    if requested > max_allowed {
        return Err(AppError::discount_limit(requested, max_allowed));
    }
    Ok(())
}

/// Validate an OrderItemInput before totalling
pub fn validate_item(item: &OrderItemInput) -> AppResult<()> {
    require_finite(item.unit_price, "unitPrice")?;
    if item.unit_price < 0.0 {
        return Err(AppError::validation(format!(
            "unitPrice must be non-negative, got {}",
            item.unit_price
        )));
    }
    if item.unit_price > MAX_UNIT_PRICE {
        return Err(AppError::validation(format!(
            "unitPrice exceeds maximum allowed ({MAX_UNIT_PRICE}), got {}",
            item.unit_price
        )));
    }

    if item.quantity <= 0 {
        return Err(AppError::validation(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {}",
            item.quantity
        )));
    }

    require_finite(item.discount_percent, "discountPercent")?;
    if !(0.0..=100.0).contains(&item.discount_percent) {
        return Err(AppError::validation(format!(
            "discountPercent must be between 0 and 100, got {}",
            item.discount_percent
        )));
    }

    Ok(())
}

/// Computed order totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    /// Gross amount: sum of `quantity * unit_price` over items
    pub total_amount: f64,
    /// Discount amount: sum of `line gross * discount_percent / 100`
    pub total_discount: f64,
}

impl OrderTotals {
    /// Net payable; derived wherever displayed, never stored separately
    pub fn net(&self) -> f64 {
        to_f64(to_decimal(self.total_amount) - to_decimal(self.total_discount))
    }
}

/// Calculate gross amount and discount amount for an order's items.
///
/// Line values accumulate in `Decimal` and are rounded once at the end, never
/// per item. An empty item list is a rejected order.
pub fn calculate_totals(items: &[OrderItemInput]) -> AppResult<OrderTotals> {
    if items.is_empty() {
        return Err(AppError::validation("Order must have at least one item"));
    }

    let mut total_amount = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;

    for item in items {
        validate_item(item)?;
        let line_gross = to_decimal(item.unit_price) * Decimal::from(item.quantity);
        let line_discount = line_gross * to_decimal(item.discount_percent) / Decimal::ONE_HUNDRED;
        total_amount += line_gross;
        total_discount += line_discount;
    }

    Ok(OrderTotals {
        total_amount: to_f64(total_amount),
        total_discount: to_f64(total_discount),
    })
}

/// Assemble a new PENDING order from a create payload.
///
/// Every item is validated and its discount checked against the acting user's
/// `max_discount` ceiling; one over-ceiling item rejects the whole order (no
/// partial item acceptance). Totals, id, order number and creation time are
/// stamped here; persisting the returned order is the caller's concern.
pub fn build_order(payload: OrderCreate, actor: &User, now: DateTime<Utc>) -> AppResult<Order> {
    for item in &payload.items {
        validate_item(item)?;
        authorize_discount(item.discount_percent, actor.max_discount)?;
    }

    let totals = calculate_totals(&payload.items)?;
    let order_number = util::order_number(now);

    tracing::debug!(
        order_number = %order_number,
        items = payload.items.len(),
        total_amount = totals.total_amount,
        total_discount = totals.total_discount,
        "Order totals computed"
    );

    let items = payload
        .items
        .into_iter()
        .map(|item| OrderItem {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            discount_percent: item.discount_percent,
        })
        .collect();

    Ok(Order {
        id: util::new_order_id(),
        order_number,
        customer_id: payload.customer_id,
        customer_name: payload.customer_name,
        company_id: actor.company_id.clone(),
        dock_id: payload.dock_id,
        status: OrderStatus::Pending,
        total_amount: totals.total_amount,
        total_discount: totals.total_discount,
        notes: payload.notes,
        scheduled_date: payload.scheduled_date,
        start_time: None,
        end_time: None,
        created_at: now,
        items,
    })
}
