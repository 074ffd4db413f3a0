use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::models::{Transaction, Wallet};
use crate::{fmt, session};

/// Account overview: balance stats plus the five most recent transactions
/// of the first wallet. Load failures log to the console and leave the
/// empty state rendered.
#[component]
pub fn Dashboard() -> Element {
    let session = session::use_session();

    let overview = use_resource(move || async move {
        let (api, user_id) = {
            let guard = session.read();
            let Some(current) = guard.as_ref() else {
                return (Vec::new(), Vec::new());
            };
            (ApiClient::from_session(Some(current)), current.user_id)
        };

        let wallets: Vec<Wallet> = api
            .wallets_for_user(user_id)
            .await
            .inspect_err(|e| log::error!("error loading wallets: {e}"))
            .unwrap_or_default();

        let recent: Vec<Transaction> = match wallets.first() {
            Some(wallet) => {
                let mut transactions = api
                    .transactions_for_wallet(wallet.id)
                    .await
                    .inspect_err(|e| log::error!("error loading transactions: {e}"))
                    .unwrap_or_default();
                transactions.truncate(5);
                transactions
            }
            None => Vec::new(),
        };

        (wallets, recent)
    });

    let welcome = session
        .read()
        .as_ref()
        .map(|s| format!("{} {}", s.first_name, s.last_name))
        .unwrap_or_default();

    rsx! {
        div { class: "container",
            h1 { class: "page-title", "Welcome, {welcome}!" }

            match &*overview.read() {
                None => rsx! {
                    div { class: "card",
                        p { "Loading..." }
                    }
                },
                Some((wallets, recent)) => {
                    let total_balance: Decimal = wallets.iter().map(|w| w.balance).sum();
                    rsx! {
                        div { class: "stats-grid",
                            div { class: "stat-card",
                                div { class: "stat-label", "Total Balance" }
                                div { class: "stat-value", "${total_balance:.2}" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-label", "Active Wallets" }
                                div { class: "stat-value", "{wallets.len()}" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-label", "Recent Transactions" }
                                div { class: "stat-value", "{recent.len()}" }
                            }
                        }

                        div { class: "card",
                            h2 { "Recent Transactions" }
                            if recent.is_empty() {
                                p { "No recent transactions" }
                            } else {
                                ul { class: "transaction-list",
                                    for txn in recent.iter() {
                                        li { key: "{txn.id}", class: "transaction-item",
                                            div {
                                                div { class: "transaction-title",
                                                    {txn.description.clone().unwrap_or_else(|| "Transaction".to_string())}
                                                }
                                                if let Some(date) = &txn.transaction_date {
                                                    div { class: "transaction-date", {fmt::short_date(date)} }
                                                }
                                            }
                                            div { class: "transaction-meta",
                                                span { class: "transaction-amount",
                                                    {fmt::money(&txn.currency, txn.amount)}
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
