//! Shared type definitions.

pub mod customer;
pub mod envelope;
pub mod id;
pub mod order;
pub mod pagination;
pub mod stats;
pub mod status;
pub mod user;

pub use customer::Customer;
pub use envelope::ApiEnvelope;
pub use id::{CustomerId, OrderId, UserId};
pub use order::Order;
pub use pagination::{DEFAULT_PAGE_LIMIT, PageQuery, Paginated};
pub use stats::{
    BatchHealthBuckets, BatchStats, CustomerStats, DashboardStats, MonthlyRevenue, OrderStats,
    TopCustomer,
};
pub use status::{CredentialStatus, CustomerStatus, OrderStatus, ShipmentStatus, UserRole};
pub use user::{AuthTokens, DemoUser, LoginResponse};
