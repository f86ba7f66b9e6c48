//! Status enums for orders, shipments, customers, and users.

use serde::{Deserialize, Serialize};

/// Order processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// Shipment status for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Awaiting,
    InTransit,
    Delivered,
    Delayed,
}

/// Customer account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

/// Import/export credential status for a customer.
///
/// Live shrimp shipments require valid sanitary credentials; the dashboard
/// surfaces customers whose paperwork is about to lapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    #[default]
    Valid,
    Expiring,
    Expired,
    Missing,
}

/// Dashboard user role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access to all dashboard features.
    Admin,
    /// Access to sales and operations views.
    Manager,
    /// Read-only demo access.
    Editor,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::Editor => write!(f, "editor"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "editor" => Ok(Self::Editor),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ShipmentStatus::InTransit).expect("serialize"),
            "\"in_transit\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).expect("serialize"),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_user_role_round_trip() {
        for role in [UserRole::Admin, UserRole::Manager, UserRole::Editor] {
            let parsed: UserRole = role.to_string().parse().expect("parse role");
            assert_eq!(parsed, role);
        }
        assert!("superuser".parse::<UserRole>().is_err());
    }
}
