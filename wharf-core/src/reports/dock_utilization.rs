//! Dock utilization report: occupancy hours vs calendar capacity

use serde::{Deserialize, Serialize};
use shared::models::Dock;

use super::window::{ReportWindow, hours_between, overlap_hours};

/// Per-dock utilization figures (stable JSON contract for the reporting UI)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockUtilization {
    pub dock_id: String,
    pub dock_name: String,
    pub total_orders: i64,
    pub order_hours: f64,
    pub maintenance_hours: f64,
    pub total_available_hours: f64,
    pub utilization_percentage: f64,
}

/// Compute per-dock utilization over the window.
///
/// Docks arrive with `orders` pre-filtered (scheduled inside the window,
/// cancelled excluded) and `maintenances` limited to intervals intersecting
/// the window. Maintenance hours are clamped to the window; order occupancy
/// is summed only for orders carrying both `start_time` and `end_time`
/// (missing bounds mean unknown occupancy, not an error). Capacity is
/// calendar hours minus maintenance; recurring weekly schedule windows are
/// not subtracted. Pure read-side computation, no mutation.
pub fn dock_utilization_report(docks: &[Dock], window: &ReportWindow) -> Vec<DockUtilization> {
    let capacity_hours = window.total_days() as f64 * 24.0;

    let report: Vec<DockUtilization> = docks
        .iter()
        .map(|dock| {
            let maintenance_hours: f64 = dock
                .maintenances
                .iter()
                .map(|m| overlap_hours(m.start_date, m.end_date, window))
                .sum();

            let order_hours: f64 = dock
                .orders
                .iter()
                .filter_map(|order| match (order.start_time, order.end_time) {
                    (Some(start), Some(end)) => Some(hours_between(start, end)),
                    _ => None,
                })
                .sum();

            let total_available_hours = capacity_hours - maintenance_hours;
            let utilization_percentage = if total_available_hours > 0.0 {
                order_hours / total_available_hours * 100.0
            } else {
                0.0
            };

            DockUtilization {
                dock_id: dock.id.clone(),
                dock_name: dock.name.clone(),
                total_orders: dock.orders.len() as i64,
                order_hours,
                maintenance_hours,
                total_available_hours,
                utilization_percentage,
            }
        })
        .collect();

    tracing::debug!(
        docks = report.len(),
        window_start = %window.start,
        window_end = %window.end,
        "Dock utilization report computed"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use shared::models::{DockMaintenance, Order, OrderStatus};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, day, hour, 0, 0).unwrap()
    }

    // 5-day window: 120 calendar hours
    fn window() -> ReportWindow {
        ReportWindow::new(at(1, 0), at(6, 0))
    }

    fn scheduled_order(id: &str, times: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Order {
        Order {
            id: id.to_string(),
            order_number: "ORD-20260401-1234".to_string(),
            customer_id: "cust-1".to_string(),
            customer_name: None,
            company_id: "company-1".to_string(),
            dock_id: Some("dock-1".to_string()),
            status: OrderStatus::InProgress,
            total_amount: 100.0,
            total_discount: 0.0,
            notes: None,
            scheduled_date: Some(at(2, 0)),
            start_time: times.map(|(s, _)| s),
            end_time: times.map(|(_, e)| e),
            created_at: at(1, 0),
            items: vec![],
        }
    }

    fn maintenance(start: DateTime<Utc>, end: DateTime<Utc>) -> DockMaintenance {
        DockMaintenance {
            id: "maint-1".to_string(),
            dock_id: "dock-1".to_string(),
            start_date: start,
            end_date: end,
            reason: Some("crane inspection".to_string()),
        }
    }

    fn dock(orders: Vec<Order>, maintenances: Vec<DockMaintenance>) -> Dock {
        Dock {
            id: "dock-1".to_string(),
            company_id: "company-1".to_string(),
            name: "North Bay".to_string(),
            description: None,
            active: true,
            schedules: vec![],
            maintenances,
            orders,
        }
    }

    #[test]
    fn test_utilization_scenario() {
        // 120h window, 10h maintenance inside it, one 3h order
        let docks = vec![dock(
            vec![scheduled_order("o1", Some((at(2, 8), at(2, 11))))],
            vec![maintenance(at(3, 0), at(3, 10))],
        )];

        let report = dock_utilization_report(&docks, &window());
        assert_eq!(report.len(), 1);
        let entry = &report[0];
        assert_eq!(entry.dock_name, "North Bay");
        assert_eq!(entry.total_orders, 1);
        assert_eq!(entry.maintenance_hours, 10.0);
        assert_eq!(entry.total_available_hours, 110.0);
        assert_eq!(entry.order_hours, 3.0);
        assert!((entry.utilization_percentage - 3.0 / 110.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_clamped_to_window() {
        // Blackout starts two days before the window and ends 6h into it
        let docks = vec![dock(vec![], vec![maintenance(at(1, 0) - chrono::Duration::days(2), at(1, 6))])];
        let report = dock_utilization_report(&docks, &window());
        assert_eq!(report[0].maintenance_hours, 6.0);
        assert_eq!(report[0].total_available_hours, 114.0);
    }

    #[test]
    fn test_orders_missing_bounds_excluded_from_hours() {
        let docks = vec![dock(
            vec![
                scheduled_order("o1", Some((at(2, 8), at(2, 12)))),
                scheduled_order("o2", None),
            ],
            vec![],
        )];
        let report = dock_utilization_report(&docks, &window());
        // Unbounded order still counts as an order, just not as hours
        assert_eq!(report[0].total_orders, 2);
        assert_eq!(report[0].order_hours, 4.0);
    }

    #[test]
    fn test_zero_available_hours_yields_zero_utilization() {
        // Maintenance covers the whole window
        let docks = vec![dock(
            vec![scheduled_order("o1", Some((at(2, 0), at(2, 3))))],
            vec![maintenance(at(1, 0), at(6, 0))],
        )];
        let report = dock_utilization_report(&docks, &window());
        assert_eq!(report[0].total_available_hours, 0.0);
        assert_eq!(report[0].utilization_percentage, 0.0);
        assert!(report[0].utilization_percentage.is_finite());
    }

    #[test]
    fn test_empty_docks() {
        assert!(dock_utilization_report(&[], &window()).is_empty());
    }

    #[test]
    fn test_json_contract_field_names() {
        let report = dock_utilization_report(&[dock(vec![], vec![])], &window());
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "dockId",
            "dockName",
            "totalOrders",
            "orderHours",
            "maintenanceHours",
            "totalAvailableHours",
            "utilizationPercentage",
        ] {
            assert!(json[0].get(key).is_some(), "missing key {key}");
        }
    }
}
