//! Customer record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::CustomerId;
use super::status::{CredentialStatus, CustomerStatus};

/// A farm customer (hatchery buyer), including the geocoordinates the
/// dashboard map view plots and the aggregate order stats shown in tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: CustomerStatus,
    pub total_orders: u32,
    pub total_spent: Decimal,
    pub last_order_at: Option<DateTime<Utc>>,
    pub credential_status: CredentialStatus,
}
