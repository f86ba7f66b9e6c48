//! Aggregate stats records for the dashboard summary endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::CustomerId;

/// Customer aggregate counts (`GET /customers/stats/summary`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total_customers: u32,
    pub active_customers: u32,
    pub new_this_month: u32,
    /// Customers whose import credentials lapse within 30 days.
    pub credentials_expiring: u32,
}

/// Order aggregate counts and revenue (`GET /orders/stats/summary`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: u32,
    pub pending: u32,
    pub processing: u32,
    pub completed: u32,
    pub cancelled: u32,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
}

/// Hatchery batch summary (`GET /batches/stats/summary`).
///
/// Aggregate counts only; there is no per-batch entity in scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStats {
    pub active_batches: u32,
    pub total_population: u64,
    pub average_survival_rate: f64,
    pub total_biomass_kg: f64,
    pub health: BatchHealthBuckets,
}

/// Health-status buckets across active batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchHealthBuckets {
    pub healthy: u32,
    pub monitor: u32,
    pub critical: u32,
}

/// One point in the monthly revenue series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label, e.g. "2026-03".
    pub month: String,
    pub revenue: Decimal,
    pub orders: u32,
}

/// A top customer by total spend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopCustomer {
    pub customer_id: CustomerId,
    pub name: String,
    pub total_spent: Decimal,
}

/// Combined dashboard aggregates (`GET /dashboard/stats`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_revenue: Decimal,
    pub total_orders: u32,
    pub active_customers: u32,
    pub active_batches: u32,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub top_customers: Vec<TopCustomer>,
}
