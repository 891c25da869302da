// src/models.rs
use serde::Deserialize;

/// Transaction detail payload (`GET /v2/{currency}/transaction/{hash}`).
///
/// Every field is optional: the API omits whatever does not apply to the
/// queried chain, and the report layer substitutes placeholders.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransactionRecord {
    pub hash: Option<String>,
    pub status: Option<bool>, // true once confirmed
    pub currency: Option<String>,
    pub time: Option<i64>,
    pub height: Option<u64>,
    pub confirmations: Option<u64>,
    pub amount: Option<f64>,
    pub amount_usd: Option<f64>,
    pub fee: Option<f64>,
    pub fee_usd: Option<f64>,
    pub gas: Option<f64>,
    pub gas_used: Option<f64>,
    pub gas_price: Option<f64>,
    pub inputs: Vec<TxEntry>,
    pub outputs: Vec<TxEntry>,
    pub tokens: Vec<TokenTransfer>,
}

/// One side of a transaction (input or output).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TxEntry {
    pub address: Option<String>,
    pub amount: Option<f64>,
    pub amount_usd: Option<f64>,
    pub score: Option<f64>, // 0-10, absent when unrated
    pub name: Option<String>,
    pub contract: Option<bool>,
}

/// ERC20-style token movement attached to an EVM transaction.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenTransfer {
    pub token: TokenInfo,
    pub value: Option<f64>,
    pub usd: Option<f64>,
    pub sender: Option<TokenParty>,
    pub receiver: Option<TokenParty>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub scam: Option<bool>,
    pub spam: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenParty {
    pub address: Option<String>,
    pub score: Option<f64>,
    pub entity: Option<Entity>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Entity {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Address statistics payload (`GET /v2/{currency}/address/stats/{address}`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddressStats {
    pub address: Option<String>,
    pub blockchain: Option<String>,
    pub balance: Balance,
    pub balance_usd: Balance,
    pub trx_count: TrxCount,
    pub entity: Option<Entity>,
    pub score: Option<f64>,
    pub first_seen: Option<i64>,
    pub last_seen: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub balance: f64,
    pub total_in: f64,
    pub total_out: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrxCount {
    #[serde(rename = "in")]
    pub incoming: u64,
    #[serde(rename = "out")]
    pub outgoing: u64,
}

/// One row of the address transaction listing
/// (`POST /v2/{currency}/address/transactions/{address}`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TxSummary {
    pub hash: Option<String>,
    pub time: Option<i64>,
    pub direction: Option<String>, // "in" or "out"
    pub total_in: f64,
    pub total_in_usd: f64,
    pub total_out: f64,
    pub total_out_usd: f64,
    pub fee: f64,
    pub fee_usd: f64,
    pub confirmations: u64,
}
