use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::models::{CreateTransactionRequest, Transaction, TransactionType};
use crate::{fmt, session};

const CREATE_TRANSACTION_FALLBACK: &str = "Could not create transaction. Please try again.";

const NO_TRANSACTIONS: &str = "No transactions yet";

fn amount_display(txn: &Transaction) -> String {
    fmt::money(&txn.currency, txn.amount)
}

#[component]
pub fn Transactions() -> Element {
    let session = session::use_session();
    let mut selected_wallet = use_signal(|| None::<i64>);
    let mut show_create_form = use_signal(|| false);
    let mut transaction_type = use_signal(|| TransactionType::Transfer);
    let mut destination_wallet = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut currency = use_signal(|| "USD".to_string());
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let wallets = use_resource(move || async move {
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

    // Default to the first wallet once the list arrives, seeding the form's
    // source wallet and currency the way the selector does.
    use_effect(move || {
        if selected_wallet.read().is_none() {
            if let Some(list) = wallets.read().as_ref() {
                if let Some(first) = list.first() {
                    selected_wallet.set(Some(first.id));
                    currency.set(first.currency.clone());
                }
            }
        }
    });

    let mut transactions = use_resource(move || async move {
        let Some(wallet_id) = *selected_wallet.read() else {
            return Vec::new();
        };
        let api = ApiClient::from_session(session.read().as_ref());
        api.transactions_for_wallet(wallet_id)
            .await
            .inspect_err(|e| log::error!("error loading transactions: {e}"))
            .unwrap_or_default()
    });

    let handle_submit = move |_: FormEvent| async move {
        error.set(None);

        let Some(source_wallet_id) = *selected_wallet.read() else {
            return;
        };
        let Ok(parsed_amount) = amount.read().trim().parse::<Decimal>() else {
            error.set(Some("Enter a valid amount.".to_string()));
            return;
        };
        let kind = *transaction_type.read();
        let destination = if kind == TransactionType::Transfer {
            destination_wallet.read().parse::<i64>().ok()
        } else {
            None
        };
        let note = description.read().trim().to_string();

        let request = CreateTransactionRequest {
            source_wallet_id,
            destination_wallet_id: destination,
            amount: parsed_amount,
            currency: currency.read().clone(),
            transaction_type: kind,
            description: if note.is_empty() { None } else { Some(note) },
        };
        let api = ApiClient::from_session(session.read().as_ref());
        match api.create_transaction(&request).await {
            Ok(_) => {
                show_create_form.set(false);
                amount.set(String::new());
                description.set(String::new());
                destination_wallet.set(String::new());
                transactions.restart();
            }
            Err(e) => error.set(Some(e.message_or(CREATE_TRANSACTION_FALLBACK))),
        }
    };

    rsx! {
        div { class: "container",
            div { class: "page-header",
                h1 { class: "page-title", "Transactions" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let showing = *show_create_form.read();
                        show_create_form.set(!showing);
                    },
                    if show_create_form() { "Cancel" } else { "+ New Transaction" }
                }
            }

            div { class: "card",
                div { class: "form-group",
                    label { "Select Wallet" }
                    select {
                        onchange: move |event| {
                            if let Ok(id) = event.value().parse::<i64>() {
                                selected_wallet.set(Some(id));
                            }
                        },
                        if let Some(list) = wallets.read().as_ref() {
                            for wallet in list.iter() {
                                option {
                                    key: "{wallet.id}",
                                    value: "{wallet.id}",
                                    selected: *selected_wallet.read() == Some(wallet.id),
                                    "{wallet.name} ({wallet.currency} {wallet.balance:.2})"
                                }
                            }
                        }
                    }
                }
            }

            if show_create_form() {
                div { class: "card",
                    h3 { "New Transaction" }

                    if let Some(message) = error.read().as_ref() {
                        div { class: "error-message", "{message}" }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "form-group",
                            label { "Transaction Type" }
                            select {
                                value: "{transaction_type}",
                                onchange: move |event| {
                                    if let Ok(kind) = event.value().parse() {
                                        transaction_type.set(kind);
                                    }
                                },
                                for kind in TransactionType::ALL {
                                    option { key: "{kind}", value: "{kind}", "{kind.label()}" }
                                }
                            }
                        }

                        if *transaction_type.read() == TransactionType::Transfer {
                            div { class: "form-group",
                                label { "Destination Wallet" }
                                select {
                                    onchange: move |event| destination_wallet.set(event.value()),
                                    option { value: "", "Select destination" }
                                    if let Some(list) = wallets.read().as_ref() {
                                        for wallet in list.iter().filter(|w| Some(w.id) != *selected_wallet.read()) {
                                            option { key: "{wallet.id}", value: "{wallet.id}", "{wallet.name}" }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "form-group",
                            label { "Amount" }
                            input {
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: "{amount}",
                                oninput: move |event| amount.set(event.value()),
                            }
                        }
                        div { class: "form-group",
                            label { "Description" }
                            input {
                                r#type: "text",
                                value: "{description}",
                                oninput: move |event| description.set(event.value()),
                            }
                        }
                        button { r#type: "submit", class: "btn btn-primary", "Create Transaction" }
                    }
                }
            }

            div { class: "card",
                h3 { "Transaction History" }
                match &*transactions.read() {
                    None => rsx! {
                        p { "Loading..." }
                    },
                    Some(transactions) => {
                        if transactions.is_empty() {
                            rsx! {
                                p { {NO_TRANSACTIONS} }
                            }
                        } else {
                            rsx! {
                                ul { class: "transaction-list",
                                    for txn in transactions.iter() {
                                        li { key: "{txn.id}", class: "transaction-item",
                                            div {
                                                div { class: "transaction-title",
                                                    {txn.description.clone().unwrap_or_else(|| txn.transaction_type.label().to_string())}
                                                    if let Some(category) = &txn.category {
                                                        span { class: "category-tag", "{category}" }
                                                    }
                                                }
                                                if let Some(date) = &txn.transaction_date {
                                                    div { class: "transaction-date", {fmt::date_time(date)} }
                                                }
                                                if let Some(reference) = &txn.reference {
                                                    div { class: "transaction-ref", "Ref: {reference}" }
                                                }
                                            }
                                            div { class: "transaction-meta",
                                                span { class: "transaction-amount",
                                                    {amount_display(txn)}
                                                }
                                                span { class: "status-badge status-{txn.status.css_class()}",
                                                    "{txn.status}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_response_selects_empty_state_copy() {
        let transactions: Vec<Transaction> = serde_json::from_str("[]").unwrap();
        assert!(transactions.is_empty());
        assert_eq!(NO_TRANSACTIONS, "No transactions yet");
    }

    #[test]
    fn history_formats_one_amount_line_per_entry() {
        let transactions: Vec<Transaction> = serde_json::from_value(json!([
            {
                "id": 1,
                "sourceWalletId": 10,
                "amount": 42.5,
                "currency": "USD",
                "transactionType": "DEPOSIT",
                "status": "COMPLETED",
            },
            {
                "id": 2,
                "sourceWalletId": 10,
                "destinationWalletId": 11,
                "amount": 9.99,
                "currency": "EUR",
                "transactionType": "TRANSFER",
                "status": "PENDING",
            },
        ]))
        .unwrap();

        let lines: Vec<String> = transactions.iter().map(amount_display).collect();
        assert_eq!(lines, ["USD 42.50", "EUR 9.99"]);
    }
}
