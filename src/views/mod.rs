//! Web interface components for the wallet platform.
//!
//! Each view is a request/response/render cycle: collect form fields, submit
//! on explicit user action, update local display state from the response.

/// Navigation bar and shell for authenticated pages
mod navbar;
pub use navbar::Navbar;

/// Login form
mod login;
pub use login::Login;

/// Registration form
mod register;
pub use register::Register;

/// Account overview with balance stats and recent activity
mod dashboard;
pub use dashboard::Dashboard;

/// Wallet list and creation form
mod wallets;
pub use wallets::Wallets;

/// Transaction history and creation form
mod transactions;
pub use transactions::Transactions;
