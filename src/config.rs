use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use eyre::{eyre, Result};
use tracing::debug;

/// Default API endpoint, overridable with `CAUDENA_API_URL`.
const API_BASE_URL: &str = "https://prism-api.caudena.com";

const KID_ENV: &str = "CAUDENA_KID";
const SECRET_ENV: &str = "CAUDENA_SECRET";

/// Accepted spellings in credential files, checked in order. First non-empty
/// value wins.
const KID_ALIASES: [&str; 5] = [
    "CAUDENA_KID",
    "id_caudena",
    "KID",
    "API_KID",
    "CAUDENA_API_KID",
];
const SECRET_ALIASES: [&str; 5] = [
    "CAUDENA_SECRET",
    "secret",
    "SECRET",
    "API_SECRET",
    "CAUDENA_API_SECRET",
];

pub fn api_base_url() -> String {
    env::var("CAUDENA_API_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| API_BASE_URL.to_string())
}

/// Resolve the `(kid, secret)` credential pair. The environment wins over any
/// file; files are searched in a fixed order and never merged.
pub fn credentials() -> Result<(String, String)> {
    let file_vars = load_first_env_file(&candidate_paths());

    let kid = resolve(env::var(KID_ENV).ok(), &KID_ALIASES, &file_vars)
        .ok_or_else(|| missing(KID_ENV))?;
    let secret = resolve(env::var(SECRET_ENV).ok(), &SECRET_ALIASES, &file_vars)
        .ok_or_else(|| missing(SECRET_ENV))?;

    Ok((kid, secret))
}

fn missing(name: &str) -> eyre::Report {
    eyre!(
        "❌ Errore: {name} non trovato\n   \
         Configura le credenziali in:\n   \
         - Variabili d'ambiente: CAUDENA_KID e CAUDENA_SECRET\n   \
         - File .env nella directory corrente\n   \
         - File .env.local nella directory corrente"
    )
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".env"), PathBuf::from(".env.local")];
    if let Some(dir) = env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        paths.push(dir.join(".env"));
    }
    paths
}

/// First existing file whose parse yields at least one entry wins.
fn load_first_env_file(paths: &[PathBuf]) -> HashMap<String, String> {
    for path in paths {
        if !path.exists() {
            continue;
        }
        let vars = parse_env_file(path);
        if !vars.is_empty() {
            debug!("credenziali lette da {}", path.display());
            return vars;
        }
    }
    HashMap::new()
}

fn parse_env_file(path: &Path) -> HashMap<String, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_env_lines(&contents),
        Err(e) => {
            eprintln!("⚠️  Avviso: Errore nel leggere {}: {e}", path.display());
            HashMap::new()
        }
    }
}

/// Parse `.env`-style content. Accepts `KEY=value` and `KEY: value`, an
/// optional leading `export `, and single or double quotes around the value.
/// `=` wins when a line carries both separators.
fn parse_env_lines(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(sep) = separator(line) else {
            continue;
        };
        let line = line.strip_prefix("export ").unwrap_or(line).trim();
        let Some((key, value)) = line.split_once(sep) else {
            continue;
        };
        vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }
    vars
}

fn separator(line: &str) -> Option<char> {
    if line.contains('=') {
        Some('=')
    } else if line.contains(':') {
        Some(':')
    } else {
        None
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn resolve(
    env_value: Option<String>,
    aliases: &[&str],
    file_vars: &HashMap<String, String>,
) -> Option<String> {
    env_value.filter(|v| !v.is_empty()).or_else(|| {
        aliases
            .iter()
            .find_map(|key| file_vars.get(*key).filter(|v| !v.is_empty()).cloned())
    })
}
