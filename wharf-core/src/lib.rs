//! Wharf engine: order financials and operational analytics
//!
//! Pure computation over already-fetched domain snapshots:
//! - [`order_money`]: order totals and per-user discount authorization at
//!   order-creation time
//! - [`reports`]: sales, dock utilization and customer activity reports over
//!   an arbitrary date window
//!
//! Data retrieval, routing, persistence and authentication live in the
//! surrounding application; nothing in this crate performs I/O.

pub mod order_money;
pub mod reports;
