//! View models exchanged with the backend API.
//!
//! Field names are camelCase on the wire, matching the backend DTOs. Wallet
//! and transaction entities are display-only on this side; the backend owns
//! balance consistency and transaction processing.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload returned by login and registration: the bearer token plus the
/// profile fields the views render. Persisted as-is in browser storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub currency: String,
    pub balance: Decimal,
    pub wallet_type: WalletType,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub source_wallet_id: i64,
    /// Absent for deposits and withdrawals.
    #[serde(default)]
    pub destination_wallet_id: Option<i64>,
    pub amount: Decimal,
    pub currency: String,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: Option<String>,
    /// Set asynchronously by the backend's categorization service.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletType {
    Checking,
    Savings,
    Investment,
    Business,
}

impl WalletType {
    pub const ALL: [WalletType; 4] = [
        WalletType::Checking,
        WalletType::Savings,
        WalletType::Investment,
        WalletType::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Checking => "CHECKING",
            WalletType::Savings => "SAVINGS",
            WalletType::Investment => "INVESTMENT",
            WalletType::Business => "BUSINESS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WalletType::Checking => "Checking",
            WalletType::Savings => "Savings",
            WalletType::Investment => "Investment",
            WalletType::Business => "Business",
        }
    }
}

impl std::fmt::Display for WalletType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WalletType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHECKING" => Ok(WalletType::Checking),
            "SAVINGS" => Ok(WalletType::Savings),
            "INVESTMENT" => Ok(WalletType::Investment),
            "BUSINESS" => Ok(WalletType::Business),
            other => Err(format!("unknown wallet type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Transfer,
    Deposit,
    Withdrawal,
    Payment,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Transfer,
        TransactionType::Deposit,
        TransactionType::Withdrawal,
        TransactionType::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "TRANSFER",
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Payment => "PAYMENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "Transfer",
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::Payment => "Payment",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRANSFER" => Ok(TransactionType::Transfer),
            "DEPOSIT" => Ok(TransactionType::Deposit),
            "WITHDRAWAL" => Ok(TransactionType::Withdrawal),
            "PAYMENT" => Ok(TransactionType::Payment),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::Unknown => "UNKNOWN",
        }
    }

    /// Suffix for the `status-*` badge class.
    pub fn css_class(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Request bodies ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    pub user_id: i64,
    pub name: String,
    pub currency: String,
    pub initial_balance: Decimal,
    pub wallet_type: WalletType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub source_wallet_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_wallet_id: Option<i64>,
    pub amount: Decimal,
    pub currency: String,
    pub transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_wallet_request_serializes_literal_payload() {
        let request = CreateWalletRequest {
            user_id: 7,
            name: "Savings".to_string(),
            currency: "USD".to_string(),
            initial_balance: "100.00".parse().unwrap(),
            wallet_type: WalletType::Savings,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "userId": 7,
                "name": "Savings",
                "currency": "USD",
                "initialBalance": "100.00",
                "walletType": "SAVINGS",
            })
        );
    }

    #[test]
    fn register_request_omits_empty_phone_number() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            phone_number: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("phoneNumber").is_none());
        assert_eq!(value["firstName"], "Alice");
    }

    #[test]
    fn transfer_request_carries_destination() {
        let request = CreateTransactionRequest {
            source_wallet_id: 1,
            destination_wallet_id: Some(2),
            amount: "25.00".parse().unwrap(),
            currency: "EUR".to_string(),
            transaction_type: TransactionType::Transfer,
            description: Some("rent".to_string()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["sourceWalletId"], 1);
        assert_eq!(value["destinationWalletId"], 2);
        assert_eq!(value["transactionType"], "TRANSFER");
    }

    #[test]
    fn session_round_trips_camel_case() {
        let payload = json!({
            "token": "jwt-abc",
            "userId": 42,
            "username": "alice",
            "email": "alice@example.com",
            "firstName": "Alice",
            "lastName": "Smith",
        });
        let session: Session = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(session.token, "jwt-abc");
        assert_eq!(session.user_id, 42);
        assert_eq!(serde_json::to_value(&session).unwrap(), payload);
    }

    #[test]
    fn transaction_deserializes_numeric_amount() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 9,
            "sourceWalletId": 1,
            "destinationWalletId": null,
            "amount": 42.5,
            "currency": "USD",
            "transactionType": "DEPOSIT",
            "status": "COMPLETED",
            "reference": "TXN-123",
            "transactionDate": "2024-03-01T09:30:00",
        }))
        .unwrap();
        assert_eq!(transaction.amount, "42.5".parse().unwrap());
        assert_eq!(transaction.status, TransactionStatus::Completed);
        assert_eq!(transaction.destination_wallet_id, None);
    }

    #[test]
    fn unknown_status_falls_back() {
        let status: TransactionStatus = serde_json::from_value(json!("REVERSED")).unwrap();
        assert_eq!(status, TransactionStatus::Unknown);
    }
}
