//! Web client for the wallet & transaction platform.
//!
//! The app renders forms, holds local UI state, and talks to the backend
//! REST API; everything durable (balances, transaction processing, auth)
//! lives on the server side.

mod api;
mod config;
mod fmt;
mod guard;
mod models;
mod session;
mod views;

use dioxus::prelude::*;

use guard::{GuestOnly, Protected};
use views::{Dashboard, Login, Register, Transactions, Wallets};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(GuestOnly)]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[end_layout]
    #[layout(Protected)]
    #[route("/")]
    Index {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/wallets")]
    Wallets {},
    #[route("/transactions")]
    Transactions {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let _ = console_log::init_with_level(log::Level::Info);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(session::load()));

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// `/` is only a landing alias for the dashboard.
#[component]
fn Index() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Dashboard {});
    });
    rsx! {}
}
