//! Customer activity report: orders, spend and item volume per customer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Customer;

use super::window::ReportWindow;
use crate::order_money::{to_decimal, to_f64};

/// Per-customer activity figures (stable JSON contract for the reporting UI)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerActivity {
    pub customer_id: String,
    pub customer_name: String,
    pub is_fidelized: bool,
    pub quota_minutes: i32,
    pub total_orders: i64,
    pub total_spent: f64,
    pub total_items: i64,
    pub average_order_value: f64,
}

/// Compute per-customer activity over the window.
///
/// Customers arrive with `orders` pre-filtered to `created_at` inside the
/// window. Cancelled orders are counted here; the sales report excludes them.
/// Spend is net of discount, accumulated in `Decimal`.
pub fn customer_activity_report(
    customers: &[Customer],
    window: &ReportWindow,
) -> Vec<CustomerActivity> {
    let report: Vec<CustomerActivity> = customers
        .iter()
        .map(|customer| {
            let total_orders = customer.orders.len() as i64;

            let mut total_spent = Decimal::ZERO;
            let mut total_items: i64 = 0;
            for order in &customer.orders {
                total_spent += to_decimal(order.total_amount) - to_decimal(order.total_discount);
                total_items += order
                    .items
                    .iter()
                    .map(|item| i64::from(item.quantity))
                    .sum::<i64>();
            }

            let average_order_value = if total_orders > 0 {
                total_spent / Decimal::from(total_orders)
            } else {
                Decimal::ZERO
            };

            CustomerActivity {
                customer_id: customer.id.clone(),
                customer_name: customer.name.clone(),
                is_fidelized: customer.is_fidelized,
                quota_minutes: customer.quota_minutes,
                total_orders,
                total_spent: to_f64(total_spent),
                total_items,
                average_order_value: to_f64(average_order_value),
            }
        })
        .collect();

    tracing::debug!(
        customers = report.len(),
        window_start = %window.start,
        window_end = %window.end,
        "Customer activity report computed"
    );

    report
}
