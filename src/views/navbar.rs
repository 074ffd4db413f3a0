use dioxus::prelude::*;

use crate::session;
use crate::Route;

#[component]
pub fn Navbar() -> Element {
    let session = session::use_session();
    let nav = use_navigator();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-brand", "Wallet & Transaction Platform" }
            div { class: "navbar-menu",
                Link { class: "navbar-link", to: Route::Dashboard {}, "Dashboard" }
                Link { class: "navbar-link", to: Route::Wallets {}, "Wallets" }
                Link { class: "navbar-link", to: Route::Transactions {}, "Transactions" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        session::clear_session(session);
                        nav.push(Route::Login {});
                    },
                    "Logout"
                }
            }
        }
        Outlet::<Route> {}
    }
}
