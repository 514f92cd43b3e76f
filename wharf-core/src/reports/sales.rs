//! Sales report: revenue rollups by product, customer and calendar day

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Order;

use super::window::ReportWindow;
use crate::order_money::{to_decimal, to_f64};

/// Report summary totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_discounts: f64,
    pub net_sales: f64,
    pub order_count: i64,
    pub average_order_value: f64,
}

/// Per-product rollup. Revenue is net-of-discount, computed per item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub revenue: f64,
}

/// Per-customer rollup. Revenue is order-level net, so it sums exactly to
/// the order nets (coarser than the item-level byProduct figures).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSales {
    pub customer_id: String,
    pub customer_name: String,
    pub order_count: i64,
    pub revenue: f64,
}

/// Per-day rollup (order creation date, UTC calendar day)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: NaiveDate,
    pub order_count: i64,
    pub revenue: f64,
}

/// Full sales report payload (stable JSON contract for the reporting UI)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub summary: SalesSummary,
    #[serde(rename = "byProduct")]
    pub by_product: Vec<ProductSales>,
    #[serde(rename = "byCustomer")]
    pub by_customer: Vec<CustomerSales>,
    #[serde(rename = "byDay")]
    pub by_day: Vec<DailySales>,
}

#[derive(Default)]
struct ProductAcc {
    name: String,
    quantity: i64,
    revenue: Decimal,
}

#[derive(Default)]
struct CustomerAcc {
    name: String,
    order_count: i64,
    revenue: Decimal,
}

#[derive(Default)]
struct DayAcc {
    order_count: i64,
    revenue: Decimal,
}

/// Aggregate orders into the sales report.
///
/// Orders must already be filtered to the target company, `created_at` inside
/// the window, and `status != CANCELLED`; this is a pure accumulation pass.
/// The three groupings are independent walks over the same order set, and
/// each emits groups in first-seen order.
pub fn sales_report(orders: &[Order], window: &ReportWindow) -> SalesReport {
    let mut total_sales = Decimal::ZERO;
    let mut total_discounts = Decimal::ZERO;

    let mut by_product: IndexMap<String, ProductAcc> = IndexMap::new();
    let mut by_customer: IndexMap<String, CustomerAcc> = IndexMap::new();
    let mut by_day: IndexMap<NaiveDate, DayAcc> = IndexMap::new();

    for order in orders {
        let gross = to_decimal(order.total_amount);
        let discount = to_decimal(order.total_discount);
        let net = gross - discount;

        total_sales += gross;
        total_discounts += discount;

        for item in &order.items {
            let line_gross = to_decimal(item.unit_price) * Decimal::from(item.quantity);
            let line_net =
                line_gross - line_gross * to_decimal(item.discount_percent) / Decimal::ONE_HUNDRED;

            let acc = by_product
                .entry(item.product_id.clone())
                .or_insert_with(|| ProductAcc {
                    name: item.product_name.clone().unwrap_or_default(),
                    ..Default::default()
                });
            acc.quantity += i64::from(item.quantity);
            acc.revenue += line_net;
        }

        let acc = by_customer
            .entry(order.customer_id.clone())
            .or_insert_with(|| CustomerAcc {
                name: order.customer_name.clone().unwrap_or_default(),
                ..Default::default()
            });
        acc.order_count += 1;
        acc.revenue += net;

        let acc = by_day.entry(order.created_at.date_naive()).or_default();
        acc.order_count += 1;
        acc.revenue += net;
    }

    let order_count = orders.len() as i64;
    let net_sales = total_sales - total_discounts;
    let average_order_value = if order_count > 0 {
        net_sales / Decimal::from(order_count)
    } else {
        Decimal::ZERO
    };

    tracing::debug!(
        order_count,
        products = by_product.len(),
        customers = by_customer.len(),
        days = by_day.len(),
        window_start = %window.start,
        window_end = %window.end,
        "Sales report aggregated"
    );

    SalesReport {
        summary: SalesSummary {
            total_sales: to_f64(total_sales),
            total_discounts: to_f64(total_discounts),
            net_sales: to_f64(net_sales),
            order_count,
            average_order_value: to_f64(average_order_value),
        },
        by_product: by_product
            .into_iter()
            .map(|(product_id, acc)| ProductSales {
                product_id,
                product_name: acc.name,
                quantity: acc.quantity,
                revenue: to_f64(acc.revenue),
            })
            .collect(),
        by_customer: by_customer
            .into_iter()
            .map(|(customer_id, acc)| CustomerSales {
                customer_id,
                customer_name: acc.name,
                order_count: acc.order_count,
                revenue: to_f64(acc.revenue),
            })
            .collect(),
        by_day: by_day
            .into_iter()
            .map(|(date, acc)| DailySales {
                date,
                order_count: acc.order_count,
                revenue: to_f64(acc.revenue),
            })
            .collect(),
    }
}
