use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::models::LoginRequest;
use crate::session;
use crate::Route;

const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";

#[component]
pub fn Login() -> Element {
    let session = session::use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_submit = move |_: FormEvent| async move {
        error.set(None);
        loading.set(true);

        let request = LoginRequest {
            username: username.read().clone(),
            password: password.read().clone(),
        };
        match ApiClient::new().login(&request).await {
            Ok(auth) => {
                session::set_session(session, auth);
                nav.push(Route::Dashboard {});
            }
            Err(e) => error.set(Some(e.message_or(LOGIN_FALLBACK))),
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-container",
            div { class: "auth-card",
                h1 { class: "auth-title", "Welcome Back" }

                if let Some(message) = error.read().as_ref() {
                    div { class: "error-message", "{message}" }
                }

                form { onsubmit: handle_submit,
                    div { class: "form-group",
                        label { "Username" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{username}",
                            oninput: move |event| username.set(event.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |event| password.set(event.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-full",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
