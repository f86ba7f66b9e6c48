//! Sales order record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CustomerId, OrderId};
use super::status::{OrderStatus, ShipmentStatus};

/// A post-larvae sales order.
///
/// Orders are immutable fixtures manufactured per request; no code path
/// creates, mutates, or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub customer_id: CustomerId,
    pub customer_name: String,
    /// Shrimp species, e.g. "Litopenaeus vannamei".
    pub species: String,
    /// Genetic line within the species, e.g. "SPF fast-growth".
    pub strain: String,
    /// Number of post-larvae units (thousands).
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub currency: String,
    pub status: OrderStatus,
    pub shipment_status: ShipmentStatus,
    pub delivery_address: String,
}
