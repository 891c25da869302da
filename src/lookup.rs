//! Lookup orchestration: one function per CLI mode, driving the API client
//! and the report formatters. A semantic miss (the API answered but found
//! nothing) prints a diagnostic and returns Ok; only HTTP-layer failures
//! bubble up as errors.

use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError};
use crate::models::{AddressStats, TransactionRecord, TxSummary};
use crate::report::{self, SUMMARY_LIMIT};
use crate::Currency;

/// Look up a single transaction by hash and print the detail report.
pub async fn by_hash(client: &ApiClient, currency: Currency, tx_hash: &str) -> Result<(), ApiError> {
    println!("\n🔍 Verifica transazione: {tx_hash}");
    println!("   Currency: {}\n", currency.to_string().to_uppercase());

    let result = client
        .get(&format!("/v2/{currency}/transaction/{tx_hash}"))
        .await?;

    if !status_ok(&result) {
        println!("❌ Transazione non trovata o errore nella risposta");
        println!("   Risposta: {result}");
        return Ok(());
    }

    let parsed = result
        .get("data")
        .filter(|data| non_empty_object(data))
        .and_then(|data| serde_json::from_value::<TransactionRecord>(data.clone()).ok());

    match parsed {
        Some(tx) => print!("{}", report::transaction_details(&tx)),
        None => {
            println!("❌ Nessun dato nella risposta");
            println!("   Risposta completa: {result}");
        }
    }
    Ok(())
}

/// Address report: statistics first, then the latest transactions. The order
/// is part of the output contract, so the two calls stay strictly sequential.
pub async fn by_address(
    client: &ApiClient,
    currency: Currency,
    address: &str,
) -> Result<(), ApiError> {
    println!("\n🔍 Verifica indirizzo: {address}");
    println!("   Currency: {}\n", currency.to_string().to_uppercase());

    let stats = client
        .get(&format!("/v2/{currency}/address/stats/{address}"))
        .await?;

    if status_ok(&stats) {
        let data = stats.get("data").cloned().unwrap_or_else(|| json!({}));
        if let Ok(parsed) = serde_json::from_value::<AddressStats>(data) {
            print!("{}", report::address_stats(&parsed));
        }
    }

    println!("\n{}", "=".repeat(80));
    println!("📋 Ultime transazioni (prime {SUMMARY_LIMIT}):");
    println!("{}\n", "=".repeat(80));

    let body = json!({ "page": 1, "sort_by": "time", "sort_order": "desc" });
    let result = client
        .post(&format!("/v2/{currency}/address/transactions/{address}"), &body)
        .await?;

    if !status_ok(&result) {
        println!("❌ Nessuna transazione trovata");
        return Ok(());
    }

    let total = result
        .pointer("/pagination/total_entries")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    println!("Totale transazioni: {total}\n");

    let transactions = result
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    for (i, tx) in transactions.iter().take(SUMMARY_LIMIT).enumerate() {
        let summary = serde_json::from_value::<TxSummary>(tx.clone()).unwrap_or_default();
        println!("--- Transazione {} ---", i + 1);
        print!("{}", report::transaction_summary(&summary));
        println!();
    }
    Ok(())
}

/// `status` in the response envelope, false when absent or not a bool.
fn status_ok(response: &Value) -> bool {
    response
        .get("status")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn non_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}
