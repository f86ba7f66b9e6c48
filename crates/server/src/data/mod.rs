//! In-memory fixture data served by the mock endpoints.
//!
//! Everything here is an immutable constant manufactured once per process;
//! no code path creates, mutates, or deletes entities. The aggregate stats
//! are derived from the fixtures so that tables, charts, and summary cards
//! stay mutually consistent.

pub mod customers;
pub mod orders;
pub mod users;

use rust_decimal::Decimal;

use shrimptrack_core::{
    BatchHealthBuckets, BatchStats, CustomerStats, DashboardStats, MonthlyRevenue, OrderStats,
    OrderStatus, TopCustomer,
};
use shrimptrack_core::{CredentialStatus, CustomerStatus};

/// Customer aggregate counts derived from the customer fixtures.
#[must_use]
pub fn customer_stats() -> CustomerStats {
    let all = customers::all();
    let active = all
        .iter()
        .filter(|c| c.status == CustomerStatus::Active)
        .count();
    let expiring = all
        .iter()
        .filter(|c| c.credential_status == CredentialStatus::Expiring)
        .count();

    CustomerStats {
        total_customers: u32::try_from(all.len()).unwrap_or(u32::MAX),
        active_customers: u32::try_from(active).unwrap_or(u32::MAX),
        new_this_month: 2,
        credentials_expiring: u32::try_from(expiring).unwrap_or(u32::MAX),
    }
}

/// Order aggregate counts and revenue derived from the order fixtures.
///
/// Revenue counts every non-cancelled order; the average is over the same
/// set.
#[must_use]
pub fn order_stats() -> OrderStats {
    let all = orders::all();
    let count_with = |status: OrderStatus| {
        u32::try_from(all.iter().filter(|o| o.status == status).count()).unwrap_or(u32::MAX)
    };

    let billable: Vec<_> = all
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .collect();
    let total_revenue: Decimal = billable.iter().map(|o| o.total_amount).sum();
    let average_order_value = if billable.is_empty() {
        Decimal::ZERO
    } else {
        (total_revenue / Decimal::from(billable.len())).round_dp(2)
    };

    OrderStats {
        total_orders: u32::try_from(all.len()).unwrap_or(u32::MAX),
        pending: count_with(OrderStatus::Pending),
        processing: count_with(OrderStatus::Processing),
        completed: count_with(OrderStatus::Completed),
        cancelled: count_with(OrderStatus::Cancelled),
        total_revenue,
        average_order_value,
    }
}

/// Hatchery batch summary. Aggregate counts only; no per-batch entity exists.
#[must_use]
pub fn batch_stats() -> BatchStats {
    BatchStats {
        active_batches: 14,
        total_population: 18_600_000,
        average_survival_rate: 0.87,
        total_biomass_kg: 12_400.0,
        health: BatchHealthBuckets {
            healthy: 11,
            monitor: 2,
            critical: 1,
        },
    }
}

/// Combined dashboard aggregates.
#[must_use]
pub fn dashboard_stats() -> DashboardStats {
    let orders = order_stats();
    let customers = customer_stats();
    let batches = batch_stats();

    let mut top: Vec<TopCustomer> = customers::all()
        .iter()
        .map(|c| TopCustomer {
            customer_id: c.id,
            name: c.name.clone(),
            total_spent: c.total_spent,
        })
        .collect();
    top.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    top.truncate(5);

    DashboardStats {
        total_revenue: orders.total_revenue,
        total_orders: orders.total_orders,
        active_customers: customers.active_customers,
        active_batches: batches.active_batches,
        monthly_revenue: monthly_revenue(),
        top_customers: top,
    }
}

/// Six months of revenue history for the dashboard chart.
fn monthly_revenue() -> Vec<MonthlyRevenue> {
    [
        ("2026-03", 18_240_00, 9),
        ("2026-04", 22_815_00, 11),
        ("2026-05", 19_470_00, 8),
        ("2026-06", 27_930_00, 13),
        ("2026-07", 31_260_00, 14),
        ("2026-08", 24_585_00, 12),
    ]
    .into_iter()
    .map(|(month, cents, orders)| MonthlyRevenue {
        month: month.to_string(),
        revenue: Decimal::new(cents, 2),
        orders,
    })
    .collect()
}
