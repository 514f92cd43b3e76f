//! Report aggregation over in-memory snapshots
//!
//! Each report consumes records already filtered by company and date range
//! (retrieval is the caller's concern) and produces plain JSON-serializable
//! aggregates. Field names are a stable camelCase contract consumed directly
//! by the reporting UI. The three reports are independent passes; none calls
//! another, and concurrent invocations share no state.

pub mod customer_activity;
pub mod dock_utilization;
pub mod sales;
pub mod window;

pub use customer_activity::{CustomerActivity, customer_activity_report};
pub use dock_utilization::{DockUtilization, dock_utilization_report};
pub use sales::{CustomerSales, DailySales, ProductSales, SalesReport, SalesSummary, sales_report};
pub use window::{ReportWindow, hours_between, overlap_hours};
