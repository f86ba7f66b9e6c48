//! Customer fixtures.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use shrimptrack_core::{CredentialStatus, Customer, CustomerId, CustomerStatus};

/// All customer fixtures, in stable id order.
#[must_use]
pub fn all() -> &'static [Customer] {
    &CUSTOMERS
}

fn ts(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: i32,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    city: &str,
    country: &str,
    coords: (f64, f64),
    status: CustomerStatus,
    total_orders: u32,
    total_spent_cents: i64,
    last_order_at: &str,
    credential_status: CredentialStatus,
) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        latitude: coords.0,
        longitude: coords.1,
        status,
        total_orders,
        total_spent: Decimal::new(total_spent_cents, 2),
        last_order_at: ts(last_order_at),
        credential_status,
    }
}

static CUSTOMERS: LazyLock<Vec<Customer>> = LazyLock::new(|| {
    use CredentialStatus::{Expired, Expiring, Missing, Valid};
    use CustomerStatus::{Active, Inactive};

    vec![
        customer(
            1,
            "Pacifico Camaronera S.A.",
            "compras@pacifico-cam.ec",
            "+593-4-555-0181",
            "Km 12 Via a la Costa",
            "Guayaquil",
            "Ecuador",
            (-2.1894, -79.8891),
            Active,
            14,
            48_250_00,
            "2026-08-12T09:30:00Z",
            Valid,
        ),
        customer(
            2,
            "Mekong Delta Aquafarms",
            "orders@mekongaqua.vn",
            "+84-292-555-0144",
            "45 Tran Hung Dao",
            "Can Tho",
            "Vietnam",
            (10.0452, 105.7469),
            Active,
            11,
            39_780_00,
            "2026-08-03T04:10:00Z",
            Expiring,
        ),
        customer(
            3,
            "Bahia Blanca Shrimp Co.",
            "supply@bahiablanca.mx",
            "+52-669-555-0122",
            "Av. del Puerto 310",
            "Mazatlan",
            "Mexico",
            (23.2494, -106.4111),
            Active,
            8,
            27_460_00,
            "2026-07-21T16:45:00Z",
            Valid,
        ),
        customer(
            4,
            "Andhra Coastal Hatcheries",
            "procurement@andhracoastal.in",
            "+91-891-555-0167",
            "Beach Road, Bheemili",
            "Visakhapatnam",
            "India",
            (17.8935, 83.4512),
            Active,
            9,
            31_120_00,
            "2026-08-19T11:05:00Z",
            Valid,
        ),
        customer(
            5,
            "Java Timur Tambak",
            "admin@javatambak.id",
            "+62-31-555-0109",
            "Jl. Pesisir 88",
            "Surabaya",
            "Indonesia",
            (-7.2575, 112.7521),
            Active,
            6,
            18_940_00,
            "2026-06-28T07:50:00Z",
            Expiring,
        ),
        customer(
            6,
            "Gulf Prawn Partners LLC",
            "buying@gulfprawn.us",
            "+1-361-555-0138",
            "1200 Harbor Dr",
            "Corpus Christi",
            "United States",
            (27.8006, -97.3964),
            Active,
            5,
            21_310_00,
            "2026-08-24T14:20:00Z",
            Valid,
        ),
        customer(
            7,
            "Chanthaburi Marine Farm",
            "contact@chanmarine.th",
            "+66-39-555-0151",
            "99 Moo 4, Laem Sing",
            "Chanthaburi",
            "Thailand",
            (12.4807, 102.0681),
            Inactive,
            3,
            7_620_00,
            "2025-11-02T02:35:00Z",
            Expired,
        ),
        customer(
            8,
            "Camaron del Sur Ltda.",
            "ventas@camaronsur.pe",
            "+51-72-555-0115",
            "Panamericana Norte Km 1183",
            "Tumbes",
            "Peru",
            (-3.5669, -80.4515),
            Active,
            7,
            23_870_00,
            "2026-07-30T18:00:00Z",
            Valid,
        ),
        customer(
            9,
            "Red Sea Aquaculture Co.",
            "imports@redsea-aqua.sa",
            "+966-12-555-0173",
            "Industrial Zone 4",
            "Jeddah",
            "Saudi Arabia",
            (21.4858, 39.1925),
            Active,
            4,
            16_050_00,
            "2026-05-17T10:15:00Z",
            Missing,
        ),
        customer(
            10,
            "Negombo Lagoon Farms",
            "office@negombofarms.lk",
            "+94-31-555-0196",
            "Lagoon Rd 27",
            "Negombo",
            "Sri Lanka",
            (7.2083, 79.8358),
            Inactive,
            2,
            5_130_00,
            "2025-09-09T06:25:00Z",
            Expired,
        ),
    ]
});
