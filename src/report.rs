//! Pure report rendering. Everything here turns an already-parsed payload
//! into console text; no network access, no process state. Missing fields
//! become "N/A" or zero so a sparse payload never aborts a report.

use std::fmt::Write;

use chrono::{LocalResult, TimeZone, Utc};

use crate::models::{AddressStats, TokenParty, TransactionRecord, TxEntry, TxSummary};

/// Inputs/outputs shown in full in the detail report; the rest is summarized
/// as a remainder count.
const ENTRY_PREVIEW: usize = 3;
/// Token transfers shown in the detail report.
const TOKEN_PREVIEW: usize = 5;
/// Transaction summaries shown in the address listing.
pub const SUMMARY_LIMIT: usize = 5;

fn rule() -> String {
    "=".repeat(80)
}

/// Full report for a transaction looked up by hash.
pub fn transaction_details(data: &TransactionRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "📄 DETTAGLI TRANSAZIONE");
    let _ = writeln!(out, "{}", rule());

    let _ = writeln!(out);
    let _ = writeln!(out, "🔹 Hash: {}", data.hash.as_deref().unwrap_or("N/A"));
    let status = if data.status.unwrap_or(false) {
        "✅ Confermata"
    } else {
        "⏳ In attesa"
    };
    let _ = writeln!(out, "🔹 Status: {status}");
    let _ = writeln!(
        out,
        "🔹 Currency: {}",
        data.currency.as_deref().unwrap_or("N/A").to_uppercase()
    );
    let _ = writeln!(out, "🔹 Timestamp: {}", format_timestamp(data.time));
    let _ = writeln!(out, "🔹 Block Height: {}", fmt_opt_int(data.height));
    let _ = writeln!(
        out,
        "🔹 Confirmations: {}",
        fmt_count(data.confirmations.unwrap_or(0))
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "💰 Importi:");
    let _ = writeln!(out, "   Amount: {}", fmt_opt_plain(data.amount));
    let _ = writeln!(out, "   Amount USD: ${}", fmt_usd(data.amount_usd.unwrap_or(0.0)));
    let _ = writeln!(out, "   Fee: {}", fmt_opt_plain(data.fee));
    let _ = writeln!(out, "   Fee USD: ${}", fmt_usd(data.fee_usd.unwrap_or(0.0)));

    // Gas only applies to EVM chains; a zero value is treated as absent.
    if data.gas.is_some_and(|g| g != 0.0) {
        let _ = writeln!(out, "   Gas: {}", fmt_opt_plain(data.gas));
        let _ = writeln!(out, "   Gas Used: {}", fmt_opt_plain(data.gas_used));
        let _ = writeln!(out, "   Gas Price: {}", fmt_opt_plain(data.gas_price));
    }

    if !data.inputs.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "📥 Inputs ({}):", data.inputs.len());
        write_entries(&mut out, &data.inputs, "input");
    }

    if !data.outputs.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "📤 Outputs ({}):", data.outputs.len());
        write_entries(&mut out, &data.outputs, "output");
    }

    if !data.tokens.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "🪙 Token Transfers ({}):", data.tokens.len());
        for transfer in data.tokens.iter().take(TOKEN_PREVIEW) {
            let token = &transfer.token;
            let warning = if token.scam.unwrap_or(false) || token.spam.unwrap_or(false) {
                " ⚠️  SCAM/SPAM!"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "   {} ({}): {} (${}){warning}",
                token.symbol.as_deref().unwrap_or("N/A"),
                token.name.as_deref().unwrap_or("N/A"),
                fmt_amount(transfer.value.unwrap_or(0.0)),
                fmt_usd(transfer.usd.unwrap_or(0.0)),
            );
            if let Some(sender) = party_with_address(&transfer.sender) {
                let _ = writeln!(
                    out,
                    "      From: {}... (Score: {}, {})",
                    prefix20(sender.address.as_deref().unwrap_or_default()),
                    fmt_score(sender.score),
                    party_entity(sender),
                );
            }
            if let Some(receiver) = party_with_address(&transfer.receiver) {
                let _ = writeln!(
                    out,
                    "      To: {}... (Score: {}, {})",
                    prefix20(receiver.address.as_deref().unwrap_or_default()),
                    fmt_score(receiver.score),
                    party_entity(receiver),
                );
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "⚠️  ANALISI CONTRACT:");
    let mut suspicious_found = false;
    for (entries, label) in [(&data.inputs, "Input"), (&data.outputs, "Output")] {
        for entry in entries.iter() {
            if entry.contract.unwrap_or(false) && is_suspicious_score(entry.score) {
                let _ = writeln!(
                    out,
                    "   ⚠️  CONTRACT SOSPETTO ({label}): {}",
                    entry.address.as_deref().unwrap_or("N/A")
                );
                let _ = writeln!(
                    out,
                    "      Score: {}/10 | Entity: {}",
                    fmt_score(entry.score),
                    entry.name.as_deref().unwrap_or("Unidentified")
                );
                suspicious_found = true;
            }
        }
    }
    if !suspicious_found {
        let _ = writeln!(out, "   ✅ Nessun contract sospetto rilevato");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    out
}

/// Short form used in the address transaction listing. The displayed amount
/// follows the direction: outgoing rows show totals out, everything else
/// totals in.
pub fn transaction_summary(tx: &TxSummary) -> String {
    let outgoing = tx.direction.as_deref() == Some("out");
    let (amount, amount_usd) = if outgoing {
        (tx.total_out, tx.total_out_usd)
    } else {
        (tx.total_in, tx.total_in_usd)
    };

    let mut out = String::new();
    let _ = writeln!(out, "Hash: {}...", prefix20(tx.hash.as_deref().unwrap_or("N/A")));
    let _ = writeln!(out, "Time: {}", format_timestamp(tx.time));
    let _ = writeln!(out, "Direction: {}", tx.direction.as_deref().unwrap_or("N/A"));
    let _ = writeln!(out, "Amount: {}", fmt_amount(amount));
    let _ = writeln!(out, "Amount USD: ${}", fmt_usd(amount_usd));
    let _ = writeln!(out, "Fee: {} (${})", fmt_amount(tx.fee), fmt_usd(tx.fee_usd));
    let _ = writeln!(out, "Confirmations: {}", fmt_count(tx.confirmations));
    out
}

/// Statistics block for an address lookup.
pub fn address_stats(data: &AddressStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "📊 STATISTICHE INDIRIZZO");
    let _ = writeln!(out, "{}", rule());

    let _ = writeln!(out);
    let _ = writeln!(out, "🔹 Address: {}", data.address.as_deref().unwrap_or("N/A"));

    let _ = writeln!(out);
    let _ = writeln!(out, "💰 Balance:");
    let _ = writeln!(
        out,
        "   Current: {} {}",
        fmt_native(data.balance.balance),
        data.blockchain.as_deref().unwrap_or("").to_uppercase()
    );
    let _ = writeln!(out, "   Total In: {}", fmt_native(data.balance.total_in));
    let _ = writeln!(out, "   Total Out: {}", fmt_native(data.balance.total_out));

    let _ = writeln!(out);
    let _ = writeln!(out, "💰 Balance USD:");
    let _ = writeln!(out, "   Current: ${}", fmt_usd(data.balance_usd.balance));
    let _ = writeln!(out, "   Total In: ${}", fmt_usd(data.balance_usd.total_in));
    let _ = writeln!(out, "   Total Out: ${}", fmt_usd(data.balance_usd.total_out));

    let _ = writeln!(out);
    let _ = writeln!(out, "📊 Transazioni:");
    let _ = writeln!(out, "   Incoming: {}", fmt_count(data.trx_count.incoming));
    let _ = writeln!(out, "   Outgoing: {}", fmt_count(data.trx_count.outgoing));

    if let Some(entity) = &data.entity {
        let _ = writeln!(out);
        let _ = writeln!(out, "🏢 Entity:");
        let _ = writeln!(out, "   Name: {}", entity.name.as_deref().unwrap_or("N/A"));
        let _ = writeln!(out, "   Category: {}", entity.category.as_deref().unwrap_or("N/A"));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "🔹 Score: {}/10", fmt_score(data.score));
    let _ = writeln!(out, "🔹 First Seen: {}", format_timestamp(data.first_seen));
    let _ = writeln!(out, "🔹 Last Seen: {}", format_timestamp(data.last_seen));
    out
}

fn write_entries(out: &mut String, entries: &[TxEntry], label: &str) {
    for (i, entry) in entries.iter().take(ENTRY_PREVIEW).enumerate() {
        let _ = writeln!(
            out,
            "   {}. {}... | {} | ${} | Score: {} | {}",
            i + 1,
            prefix20(entry.address.as_deref().unwrap_or("N/A")),
            fmt_amount(entry.amount.unwrap_or(0.0)),
            fmt_usd(entry.amount_usd.unwrap_or(0.0)),
            fmt_score(entry.score),
            entry.name.as_deref().unwrap_or("Unidentified"),
        );
    }
    if entries.len() > ENTRY_PREVIEW {
        let _ = writeln!(out, "   ... e altri {} {label}", entries.len() - ENTRY_PREVIEW);
    }
}

/// A rated score below 4 marks a contract as suspicious. A score of exactly 0
/// counts: it is the worst rating the API hands out, not a missing value.
/// Unrated contracts (no score at all) are left alone.
fn is_suspicious_score(score: Option<f64>) -> bool {
    score.is_some_and(|s| s < 4.0)
}

fn party_with_address(party: &Option<TokenParty>) -> Option<&TokenParty> {
    party
        .as_ref()
        .filter(|p| p.address.as_deref().is_some_and(|a| !a.is_empty()))
}

fn party_entity(party: &TokenParty) -> &str {
    party
        .entity
        .as_ref()
        .and_then(|e| e.name.as_deref())
        .unwrap_or("Unidentified")
}

/// Unix timestamp → `YYYY-MM-DD HH:MM:SS UTC`. Zero and absent render as
/// "N/A"; a value chrono cannot place on the calendar falls back to the raw
/// number.
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    match timestamp {
        None | Some(0) => "N/A".to_string(),
        Some(ts) => match Utc.timestamp_opt(ts, 0) {
            LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            _ => ts.to_string(),
        },
    }
}

/// First 20 characters of an address; the tail is noise in a console report.
fn prefix20(addr: &str) -> &str {
    addr.get(..20).unwrap_or(addr)
}

/// Thousands-grouped rendering keeping whatever decimals the value carries.
pub fn fmt_amount(value: f64) -> String {
    group_thousands(&format_plain(value))
}

/// USD rendering: two decimals, thousands separators. The `$` stays at the
/// call site.
pub fn fmt_usd(value: f64) -> String {
    group_thousands(&format!("{value:.2}"))
}

/// Native-unit balances at 8 decimals.
pub fn fmt_native(value: f64) -> String {
    group_thousands(&format!("{value:.8}"))
}

pub fn fmt_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Risk score: bare number, or "N/A" when unrated.
pub fn fmt_score(score: Option<f64>) -> String {
    score.map(format_plain).unwrap_or_else(|| "N/A".to_string())
}

fn fmt_opt_plain(value: Option<f64>) -> String {
    value.map(format_plain).unwrap_or_else(|| "N/A".to_string())
}

fn fmt_opt_int(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

// Integral floats drop the decimal point, matching how the API's JSON
// integers read before serde widens them to f64.
fn format_plain(value: f64) -> String {
    format!("{value}")
}

fn group_thousands(rendered: &str) -> String {
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, TokenInfo, TokenTransfer};

    fn entry(address: &str, score: Option<f64>, contract: bool) -> TxEntry {
        TxEntry {
            address: Some(address.to_string()),
            amount: Some(1500.0),
            amount_usd: Some(42.5),
            score,
            name: None,
            contract: Some(contract),
        }
    }

    fn tx_with_inputs(n: usize) -> TransactionRecord {
        TransactionRecord {
            hash: Some("abc123".to_string()),
            status: Some(true),
            confirmations: Some(12),
            amount: Some(100.0),
            inputs: (0..n)
                .map(|i| entry(&format!("addr-{i}-padded-to-twenty-chars"), Some(5.0), false))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn zero_and_missing_timestamps_are_placeholder() {
        assert_eq!(format_timestamp(None), "N/A");
        assert_eq!(format_timestamp(Some(0)), "N/A");
    }

    #[test]
    fn valid_timestamp_renders_in_utc() {
        assert_eq!(
            format_timestamp(Some(1_700_000_000)),
            "2023-11-14 22:13:20 UTC"
        );
    }

    #[test]
    fn unrepresentable_timestamp_falls_back_to_raw_number() {
        assert_eq!(format_timestamp(Some(i64::MAX)), i64::MAX.to_string());
    }

    #[test]
    fn usd_has_two_decimals_and_grouping() {
        assert_eq!(fmt_usd(1_234_567.891), "1,234,567.89");
        assert_eq!(fmt_usd(0.0), "0.00");
        assert_eq!(fmt_usd(-1234.5), "-1,234.50");
    }

    #[test]
    fn amounts_group_thousands_and_keep_natural_decimals() {
        assert_eq!(fmt_amount(1_234_567.0), "1,234,567");
        assert_eq!(fmt_amount(1234.5), "1,234.5");
        assert_eq!(fmt_amount(100.0), "100");
        assert_eq!(fmt_amount(-1_000_000.0), "-1,000,000");
    }

    #[test]
    fn native_balances_have_eight_decimals() {
        assert_eq!(fmt_native(0.1), "0.10000000");
        assert_eq!(fmt_native(12_345.678), "12,345.67800000");
    }

    #[test]
    fn score_is_bare_number_or_placeholder() {
        assert_eq!(fmt_score(Some(5.0)), "5");
        assert_eq!(fmt_score(Some(2.5)), "2.5");
        assert_eq!(fmt_score(None), "N/A");
    }

    #[test]
    fn confirmed_transaction_shows_confirmed_status() {
        let report = transaction_details(&tx_with_inputs(1));
        assert!(report.contains("🔹 Status: ✅ Confermata"));
    }

    #[test]
    fn unconfirmed_transaction_shows_pending_status() {
        let tx = TransactionRecord {
            status: Some(false),
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("🔹 Status: ⏳ In attesa"));
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let report = transaction_details(&TransactionRecord::default());
        assert!(report.contains("🔹 Hash: N/A"));
        assert!(report.contains("🔹 Currency: N/A"));
        assert!(report.contains("🔹 Timestamp: N/A"));
        assert!(report.contains("🔹 Block Height: N/A"));
        assert!(report.contains("🔹 Confirmations: 0"));
        assert!(report.contains("   Amount: N/A"));
        assert!(report.contains("   Amount USD: $0.00"));
    }

    #[test]
    fn at_most_three_inputs_with_remainder_line() {
        let report = transaction_details(&tx_with_inputs(4));
        assert!(report.contains("📥 Inputs (4):"));
        assert!(report.contains("   1. "));
        assert!(report.contains("   2. "));
        assert!(report.contains("   3. "));
        assert!(!report.contains("   4. "));
        assert!(report.contains("   ... e altri 1 input"));
    }

    #[test]
    fn three_inputs_have_no_remainder_line() {
        let report = transaction_details(&tx_with_inputs(3));
        assert!(report.contains("   3. "));
        assert!(!report.contains("... e altri"));
    }

    #[test]
    fn outputs_use_their_own_remainder_label() {
        let tx = TransactionRecord {
            outputs: (0..7).map(|_| entry("addr", None, false)).collect(),
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("📤 Outputs (7):"));
        assert!(report.contains("   ... e altri 4 output"));
    }

    #[test]
    fn entry_addresses_are_truncated_to_twenty_chars() {
        let tx = TransactionRecord {
            inputs: vec![entry("0123456789012345678901234567890123456789", Some(5.0), false)],
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("   1. 01234567890123456789... |"));
    }

    #[test]
    fn unnamed_entries_fall_back_to_unidentified() {
        let report = transaction_details(&tx_with_inputs(1));
        assert!(report.contains("| Unidentified"));
    }

    #[test]
    fn gas_block_is_hidden_without_gas() {
        let report = transaction_details(&TransactionRecord::default());
        assert!(!report.contains("Gas:"));
    }

    #[test]
    fn gas_block_appears_when_gas_is_present() {
        let tx = TransactionRecord {
            gas: Some(21000.0),
            gas_used: Some(21000.0),
            gas_price: Some(31.5),
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("   Gas: 21000"));
        assert!(report.contains("   Gas Used: 21000"));
        assert!(report.contains("   Gas Price: 31.5"));
    }

    #[test]
    fn scam_token_carries_warning_marker() {
        let tx = TransactionRecord {
            tokens: vec![TokenTransfer {
                token: TokenInfo {
                    symbol: Some("FAKE".to_string()),
                    name: Some("Fake Token".to_string()),
                    scam: Some(true),
                    spam: None,
                },
                value: Some(1000.0),
                usd: Some(12.0),
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("🪙 Token Transfers (1):"));
        assert!(report.contains("   FAKE (Fake Token): 1,000 ($12.00) ⚠️  SCAM/SPAM!"));
    }

    #[test]
    fn token_parties_show_only_with_an_address() {
        let tx = TransactionRecord {
            tokens: vec![TokenTransfer {
                sender: Some(TokenParty {
                    address: Some("sender-address-longer-than-twenty".to_string()),
                    score: Some(8.0),
                    entity: Some(Entity {
                        name: Some("Exchange X".to_string()),
                        category: None,
                    }),
                }),
                receiver: Some(TokenParty::default()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("      From: sender-address-longe... (Score: 8, Exchange X)"));
        assert!(!report.contains("      To: "));
    }

    #[test]
    fn low_scored_contract_is_flagged() {
        let tx = TransactionRecord {
            inputs: vec![entry("contract-address", Some(3.0), true)],
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("   ⚠️  CONTRACT SOSPETTO (Input): contract-address"));
        assert!(report.contains("      Score: 3/10 | Entity: Unidentified"));
        assert!(!report.contains("Nessun contract sospetto"));
    }

    // The original tool skipped score 0 behind a truthiness check; here a
    // rated 0 is the strongest signal and is flagged.
    #[test]
    fn contract_with_zero_score_is_flagged() {
        let tx = TransactionRecord {
            outputs: vec![entry("zero-score-contract", Some(0.0), true)],
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("   ⚠️  CONTRACT SOSPETTO (Output): zero-score-contract"));
        assert!(report.contains("      Score: 0/10"));
    }

    #[test]
    fn contract_without_score_is_not_flagged() {
        let tx = TransactionRecord {
            inputs: vec![entry("unrated-contract", None, true)],
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("   ✅ Nessun contract sospetto rilevato"));
    }

    #[test]
    fn well_scored_contract_is_not_flagged() {
        let tx = TransactionRecord {
            inputs: vec![entry("good-contract", Some(4.0), true)],
            outputs: vec![entry("better-contract", Some(9.0), true)],
            ..Default::default()
        };
        let report = transaction_details(&tx);
        assert!(report.contains("   ✅ Nessun contract sospetto rilevato"));
    }

    #[test]
    fn contract_scan_covers_entries_beyond_the_preview() {
        // The fourth input never shows in the list but must still be scanned.
        let mut tx = tx_with_inputs(3);
        tx.inputs.push(entry("hidden-bad-contract", Some(1.0), true));
        let report = transaction_details(&tx);
        assert!(report.contains("   ⚠️  CONTRACT SOSPETTO (Input): hidden-bad-contract"));
    }

    #[test]
    fn summary_outgoing_selects_total_out() {
        let tx = TxSummary {
            hash: Some("deadbeefdeadbeefdeadbeef".to_string()),
            direction: Some("out".to_string()),
            total_in: 1.0,
            total_in_usd: 2.0,
            total_out: 300_000.0,
            total_out_usd: 450.5,
            fee: 1200.0,
            fee_usd: 0.8,
            confirmations: 1_234,
            ..Default::default()
        };
        let summary = transaction_summary(&tx);
        assert!(summary.contains("Hash: deadbeefdeadbeefdead..."));
        assert!(summary.contains("Direction: out"));
        assert!(summary.contains("Amount: 300,000"));
        assert!(summary.contains("Amount USD: $450.50"));
        assert!(summary.contains("Fee: 1,200 ($0.80)"));
        assert!(summary.contains("Confirmations: 1,234"));
    }

    #[test]
    fn summary_incoming_and_unknown_directions_select_total_in() {
        let tx = TxSummary {
            direction: Some("in".to_string()),
            total_in: 42.0,
            total_out: 7.0,
            ..Default::default()
        };
        assert!(transaction_summary(&tx).contains("Amount: 42"));

        let tx = TxSummary {
            direction: None,
            total_in: 42.0,
            total_out: 7.0,
            ..Default::default()
        };
        let summary = transaction_summary(&tx);
        assert!(summary.contains("Direction: N/A"));
        assert!(summary.contains("Amount: 42"));
    }

    #[test]
    fn address_stats_render_balances_and_counts() {
        let stats = AddressStats {
            address: Some("bc1qexample".to_string()),
            blockchain: Some("btc".to_string()),
            balance: crate::models::Balance {
                balance: 1.5,
                total_in: 12_345.678,
                total_out: 12_344.178,
            },
            balance_usd: crate::models::Balance {
                balance: 97_500.0,
                total_in: 0.0,
                total_out: 0.0,
            },
            trx_count: crate::models::TrxCount {
                incoming: 1_050,
                outgoing: 900,
            },
            score: Some(7.0),
            first_seen: Some(1_700_000_000),
            ..Default::default()
        };
        let report = address_stats(&stats);
        assert!(report.contains("📊 STATISTICHE INDIRIZZO"));
        assert!(report.contains("🔹 Address: bc1qexample"));
        assert!(report.contains("   Current: 1.50000000 BTC"));
        assert!(report.contains("   Total In: 12,345.67800000"));
        assert!(report.contains("   Current: $97,500.00"));
        assert!(report.contains("   Incoming: 1,050"));
        assert!(report.contains("   Outgoing: 900"));
        assert!(report.contains("🔹 Score: 7/10"));
        assert!(report.contains("🔹 First Seen: 2023-11-14 22:13:20 UTC"));
        assert!(report.contains("🔹 Last Seen: N/A"));
    }

    #[test]
    fn address_stats_entity_block_only_when_present() {
        let report = address_stats(&AddressStats::default());
        assert!(!report.contains("🏢 Entity:"));

        let stats = AddressStats {
            entity: Some(Entity {
                name: Some("Mixer Y".to_string()),
                category: Some("mixer".to_string()),
            }),
            ..Default::default()
        };
        let report = address_stats(&stats);
        assert!(report.contains("🏢 Entity:"));
        assert!(report.contains("   Name: Mixer Y"));
        assert!(report.contains("   Category: mixer"));
    }
}
