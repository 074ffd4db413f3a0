use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::models::{CreateWalletRequest, Wallet, WalletType};
use crate::{fmt, session};

const CREATE_WALLET_FALLBACK: &str = "Could not create wallet. Please try again.";

const CURRENCIES: &[&str] = &["USD", "EUR", "GBP"];

#[component]
pub fn Wallets() -> Element {
    let session = session::use_session();
    let mut show_create_form = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut currency = use_signal(|| "USD".to_string());
    let mut initial_balance = use_signal(String::new);
    let mut wallet_type = use_signal(|| WalletType::Checking);
    let mut error = use_signal(|| None::<String>);

    let mut wallets = use_resource(move || async move {
        let (api, user_id) = {
            let guard = session.read();
            let Some(current) = guard.as_ref() else {
                return Vec::new();
            };
            (ApiClient::from_session(Some(current)), current.user_id)
        };
        api.wallets_for_user(user_id)
            .await
            .inspect_err(|e| log::error!("error loading wallets: {e}"))
            .unwrap_or_default()
    });

    let handle_submit = move |_: FormEvent| async move {
        error.set(None);

        let Ok(balance) = initial_balance.read().trim().parse::<Decimal>() else {
            error.set(Some("Enter a valid initial balance.".to_string()));
            return;
        };
        let (api, user_id) = {
            let guard = session.read();
            let Some(current) = guard.as_ref() else {
                return;
            };
            (ApiClient::from_session(Some(current)), current.user_id)
        };

        let request = CreateWalletRequest {
            user_id,
            name: name.read().clone(),
            currency: currency.read().clone(),
            initial_balance: balance,
            wallet_type: *wallet_type.read(),
        };
        match api.create_wallet(&request).await {
            Ok(_) => {
                show_create_form.set(false);
                name.set(String::new());
                initial_balance.set(String::new());
                wallets.restart();
            }
            Err(e) => error.set(Some(e.message_or(CREATE_WALLET_FALLBACK))),
        }
    };

    rsx! {
        div { class: "container",
            div { class: "page-header",
                h1 { class: "page-title", "My Wallets" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let showing = *show_create_form.read();
                        show_create_form.set(!showing);
                    },
                    if show_create_form() { "Cancel" } else { "+ Create Wallet" }
                }
            }

            if show_create_form() {
                div { class: "card",
                    h3 { "Create New Wallet" }

                    if let Some(message) = error.read().as_ref() {
                        div { class: "error-message", "{message}" }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "form-group",
                            label { "Wallet Name" }
                            input {
                                r#type: "text",
                                required: true,
                                value: "{name}",
                                oninput: move |event| name.set(event.value()),
                            }
                        }
                        div { class: "form-group",
                            label { "Currency" }
                            select {
                                value: "{currency}",
                                onchange: move |event| currency.set(event.value()),
                                for code in CURRENCIES {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                        div { class: "form-group",
                            label { "Initial Balance" }
                            input {
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: "{initial_balance}",
                                oninput: move |event| initial_balance.set(event.value()),
                            }
                        }
                        div { class: "form-group",
                            label { "Wallet Type" }
                            select {
                                value: "{wallet_type}",
                                onchange: move |event| {
                                    if let Ok(kind) = event.value().parse() {
                                        wallet_type.set(kind);
                                    }
                                },
                                for kind in WalletType::ALL {
                                    option { key: "{kind}", value: "{kind}", "{kind.label()}" }
                                }
                            }
                        }
                        button { r#type: "submit", class: "btn btn-primary", "Create Wallet" }
                    }
                }
            }

            match &*wallets.read() {
                None => rsx! {
                    p { class: "muted", "Loading wallets..." }
                },
                Some(wallets) => rsx! {
                    div { class: "wallet-grid",
                        for wallet in wallets.iter() {
                            WalletCard { key: "{wallet.id}", wallet: wallet.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn WalletCard(wallet: Wallet) -> Element {
    rsx! {
        div { class: "wallet-card",
            div { class: "wallet-card-header",
                div { "{wallet.wallet_type.label()}" }
                div { "{wallet.currency}" }
            }
            h3 { "{wallet.name}" }
            div { class: "wallet-balance", {fmt::money(&wallet.currency, wallet.balance)} }
            if let Some(created) = &wallet.created_at {
                div { class: "wallet-created", "Created " {fmt::short_date(created)} }
            }
        }
    }
}
