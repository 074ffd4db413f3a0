//! Route guard: two states (authenticated / unauthenticated), no
//! intermediate states, no timeout.

use dioxus::prelude::*;

use crate::session;
use crate::views::Navbar;
use crate::Route;

/// Outcome of a navigation against the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Grant,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide whether `route` may render. Login and register are guest-only;
/// everything else requires a session.
pub fn evaluate(route: &Route, authenticated: bool) -> Access {
    match route {
        Route::Login {} | Route::Register {} => {
            if authenticated {
                Access::RedirectToDashboard
            } else {
                Access::Grant
            }
        }
        _ => {
            if authenticated {
                Access::Grant
            } else {
                Access::RedirectToLogin
            }
        }
    }
}

/// Layout for protected routes. Renders the navbar shell when a session
/// exists, otherwise redirects to login.
#[component]
pub fn Protected() -> Element {
    let session = session::use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        if session.read().is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Drop the read guard before the tail expression borrows it.
    let authenticated = session.read().is_some();
    match evaluate(&route, authenticated) {
        Access::Grant => rsx! {
            Navbar {}
        },
        _ => rsx! {},
    }
}

/// Layout for login/register. An already-authenticated visitor is sent to
/// the dashboard instead.
#[component]
pub fn GuestOnly() -> Element {
    let session = session::use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        if session.read().is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let authenticated = session.read().is_some();
    match evaluate(&route, authenticated) {
        Access::Grant => rsx! {
            Outlet::<Route> {}
        },
        _ => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [Route; 4] = [
        Route::Index {},
        Route::Dashboard {},
        Route::Wallets {},
        Route::Transactions {},
    ];

    #[test]
    fn unauthenticated_protected_paths_redirect_to_login() {
        for route in PROTECTED {
            assert_eq!(evaluate(&route, false), Access::RedirectToLogin);
        }
    }

    #[test]
    fn authenticated_protected_paths_render() {
        for route in PROTECTED {
            assert_eq!(evaluate(&route, true), Access::Grant);
        }
    }

    #[test]
    fn authenticated_guest_paths_redirect_to_dashboard() {
        assert_eq!(
            evaluate(&Route::Login {}, true),
            Access::RedirectToDashboard
        );
        assert_eq!(
            evaluate(&Route::Register {}, true),
            Access::RedirectToDashboard
        );
    }

    #[test]
    fn unauthenticated_guest_paths_render() {
        assert_eq!(evaluate(&Route::Login {}, false), Access::Grant);
        assert_eq!(evaluate(&Route::Register {}, false), Access::Grant);
    }

    #[test]
    fn cleared_session_revokes_protected_access() {
        // Guard outcome flips as soon as the session is gone, which is all
        // logout does to routing.
        assert_eq!(evaluate(&Route::Dashboard {}, true), Access::Grant);
        assert_eq!(
            evaluate(&Route::Dashboard {}, false),
            Access::RedirectToLogin
        );
    }
}
