//! Order fixtures.
//!
//! Quantities are thousands of post-larvae (PL). Unit prices are per
//! thousand PL, so `total_amount == quantity * unit_price`.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use shrimptrack_core::{CustomerId, Order, OrderId, OrderStatus, ShipmentStatus};

/// All order fixtures, newest first (the dashboard shows recent orders on
/// page one).
#[must_use]
pub fn all() -> &'static [Order] {
    &ORDERS
}

const VANNAMEI: &str = "Litopenaeus vannamei";
const MONODON: &str = "Penaeus monodon";

#[allow(clippy::too_many_arguments)]
fn order(
    id: i32,
    order_number: &str,
    customer_id: i32,
    customer_name: &str,
    species: &str,
    strain: &str,
    quantity: u32,
    unit_price_cents: i64,
    status: OrderStatus,
    shipment_status: ShipmentStatus,
    delivery_address: &str,
) -> Order {
    let unit_price = Decimal::new(unit_price_cents, 2);
    Order {
        id: OrderId::new(id),
        order_number: order_number.to_string(),
        customer_id: CustomerId::new(customer_id),
        customer_name: customer_name.to_string(),
        species: species.to_string(),
        strain: strain.to_string(),
        quantity,
        unit_price,
        total_amount: unit_price * Decimal::from(quantity),
        currency: "USD".to_string(),
        status,
        shipment_status,
        delivery_address: delivery_address.to_string(),
    }
}

static ORDERS: LazyLock<Vec<Order>> = LazyLock::new(|| {
    use OrderStatus::{Cancelled, Completed, Pending, Processing};
    use ShipmentStatus::{Awaiting, Delayed, Delivered, InTransit};

    vec![
        order(
            12,
            "SO-2026-0812",
            6,
            "Gulf Prawn Partners LLC",
            VANNAMEI,
            "SPF fast-growth",
            450,
            12_50,
            Pending,
            Awaiting,
            "1200 Harbor Dr, Corpus Christi, United States",
        ),
        order(
            11,
            "SO-2026-0789",
            4,
            "Andhra Coastal Hatcheries",
            MONODON,
            "SPF Moana line",
            300,
            16_80,
            Processing,
            Awaiting,
            "Beach Road, Bheemili, Visakhapatnam, India",
        ),
        order(
            10,
            "SO-2026-0771",
            1,
            "Pacifico Camaronera S.A.",
            VANNAMEI,
            "High-salinity tolerant",
            800,
            11_20,
            Processing,
            InTransit,
            "Km 12 Via a la Costa, Guayaquil, Ecuador",
        ),
        order(
            9,
            "SO-2026-0748",
            2,
            "Mekong Delta Aquafarms",
            VANNAMEI,
            "SPF fast-growth",
            650,
            12_50,
            Completed,
            Delivered,
            "45 Tran Hung Dao, Can Tho, Vietnam",
        ),
        order(
            8,
            "SO-2026-0726",
            8,
            "Camaron del Sur Ltda.",
            VANNAMEI,
            "Disease-resistant K4",
            500,
            13_40,
            Completed,
            Delivered,
            "Panamericana Norte Km 1183, Tumbes, Peru",
        ),
        order(
            7,
            "SO-2026-0702",
            3,
            "Bahia Blanca Shrimp Co.",
            MONODON,
            "SPF Moana line",
            250,
            16_80,
            Completed,
            Delayed,
            "Av. del Puerto 310, Mazatlan, Mexico",
        ),
        order(
            6,
            "SO-2026-0688",
            5,
            "Java Timur Tambak",
            VANNAMEI,
            "SPF fast-growth",
            400,
            12_50,
            Completed,
            Delivered,
            "Jl. Pesisir 88, Surabaya, Indonesia",
        ),
        order(
            5,
            "SO-2026-0654",
            9,
            "Red Sea Aquaculture Co.",
            VANNAMEI,
            "High-salinity tolerant",
            350,
            11_20,
            Cancelled,
            Awaiting,
            "Industrial Zone 4, Jeddah, Saudi Arabia",
        ),
        order(
            4,
            "SO-2026-0631",
            1,
            "Pacifico Camaronera S.A.",
            VANNAMEI,
            "SPF fast-growth",
            700,
            12_50,
            Completed,
            Delivered,
            "Km 12 Via a la Costa, Guayaquil, Ecuador",
        ),
        order(
            3,
            "SO-2026-0617",
            4,
            "Andhra Coastal Hatcheries",
            MONODON,
            "Black tiger select",
            200,
            17_90,
            Completed,
            Delivered,
            "Beach Road, Bheemili, Visakhapatnam, India",
        ),
        order(
            2,
            "SO-2026-0590",
            2,
            "Mekong Delta Aquafarms",
            VANNAMEI,
            "Disease-resistant K4",
            550,
            13_40,
            Completed,
            Delivered,
            "45 Tran Hung Dao, Can Tho, Vietnam",
        ),
        order(
            1,
            "SO-2026-0566",
            7,
            "Chanthaburi Marine Farm",
            MONODON,
            "Black tiger select",
            150,
            17_90,
            Cancelled,
            Awaiting,
            "99 Moo 4, Laem Sing, Chanthaburi, Thailand",
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_match_quantity_times_unit_price() {
        for o in all() {
            assert_eq!(
                o.total_amount,
                o.unit_price * Decimal::from(o.quantity),
                "order {}",
                o.order_number
            );
        }
    }

    #[test]
    fn test_order_numbers_unique() {
        let mut numbers: Vec<&str> = all().iter().map(|o| o.order_number.as_str()).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), all().len());
    }

    #[test]
    fn test_customer_references_exist() {
        let customers = super::super::customers::all();
        for o in all() {
            assert!(
                customers.iter().any(|c| c.id == o.customer_id),
                "order {} references unknown customer",
                o.order_number
            );
        }
    }
}
