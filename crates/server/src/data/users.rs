//! Fixed demo accounts and mock token matching.
//!
//! This is demo "authentication": credentials are literal strings and tokens
//! are matched by substring. It exists so the dashboard login flow works
//! without a user store; it is a placeholder, not a reference auth scheme.

use std::sync::LazyLock;

use shrimptrack_core::{DemoUser, UserId, UserRole};

/// A demo account: fixed user record plus its literal password.
pub struct DemoAccount {
    pub user: DemoUser,
    pub password: &'static str,
}

fn account(id: i32, email: &str, name: &str, role: UserRole, password: &'static str) -> DemoAccount {
    DemoAccount {
        user: DemoUser {
            id: UserId::new(id),
            email: email.to_string(),
            name: name.to_string(),
            role,
        },
        password,
    }
}

static DEMO_ACCOUNTS: LazyLock<Vec<DemoAccount>> = LazyLock::new(|| {
    vec![
        account(
            1,
            "admin@shrimptrack.io",
            "Farm Administrator",
            UserRole::Admin,
            "admin123",
        ),
        account(
            2,
            "manager@shrimptrack.io",
            "Sales Manager",
            UserRole::Manager,
            "manager123",
        ),
        account(
            3,
            "demo@shrimptrack.io",
            "Demo User",
            UserRole::Editor,
            "demo123",
        ),
    ]
});

/// All demo accounts.
#[must_use]
pub fn accounts() -> &'static [DemoAccount] {
    &DEMO_ACCOUNTS
}

/// Look up a demo user by exact credential pair.
#[must_use]
pub fn authenticate(email: &str, password: &str) -> Option<&'static DemoUser> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.user.email == email && a.password == password)
        .map(|a| &a.user)
}

/// Map a bearer token back to a demo user by the `-<id>-` substring that
/// login embeds in the token.
#[must_use]
pub fn user_for_token(token: &str) -> Option<&'static DemoUser> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| token.contains(&format!("-{}-", a.user.id)))
        .map(|a| &a.user)
}

/// Human-readable hint listing the valid demo accounts, returned with 401s.
#[must_use]
pub fn login_hint() -> String {
    let pairs: Vec<String> = DEMO_ACCOUNTS
        .iter()
        .map(|a| format!("{} / {}", a.user.email, a.password))
        .collect();
    format!("Invalid credentials. Demo accounts: {}", pairs.join(", "))
}
