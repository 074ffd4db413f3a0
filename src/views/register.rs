use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::models::RegisterRequest;
use crate::session;
use crate::Route;

const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

#[component]
pub fn Register() -> Element {
    let session = session::use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_submit = move |_: FormEvent| async move {
        error.set(None);
        loading.set(true);

        let phone = phone_number.read().trim().to_string();
        let request = RegisterRequest {
            username: username.read().clone(),
            email: email.read().clone(),
            password: password.read().clone(),
            first_name: first_name.read().clone(),
            last_name: last_name.read().clone(),
            phone_number: if phone.is_empty() { None } else { Some(phone) },
        };
        match ApiClient::new().register(&request).await {
            Ok(auth) => {
                session::set_session(session, auth);
                nav.push(Route::Dashboard {});
            }
            Err(e) => error.set(Some(e.message_or(REGISTER_FALLBACK))),
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-container",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create Account" }

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
                        label { "Email" }
                        input {
                            r#type: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |event| email.set(event.value()),
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
                    div { class: "form-group",
                        label { "First Name" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{first_name}",
                            oninput: move |event| first_name.set(event.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Last Name" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{last_name}",
                            oninput: move |event| last_name.set(event.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Phone Number (Optional)" }
                        input {
                            r#type: "tel",
                            value: "{phone_number}",
                            oninput: move |event| phone_number.set(event.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-full",
                        disabled: loading(),
                        if loading() { "Creating Account..." } else { "Register" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
