use crate::domain::constants::{AUDIT_FILE_NAME, CONFIG_DIR, STATE_FILE_NAME};
use crate::domain::models::{AttendanceToken, ConsumedToken, State};
use std::path::PathBuf;
use std::time::Duration;

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(CONFIG_DIR))
}

pub fn audit(action: &str, data: serde_json::Value) {
    let path = match config_dir() {
        Ok(d) => d.join(AUDIT_FILE_NAME),
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn state_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join(STATE_FILE_NAME))
}

pub fn load_state() -> anyhow::Result<State> {
    let p = state_path()?;
    if !p.exists() {
        return Ok(State::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_state(s: &State) -> anyhow::Result<()> {
    let p = state_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(s)?)?;
    Ok(())
}

/// Drops ledger entries whose token can no longer pass the freshness check.
pub fn prune_consumed(state: &mut State, now_ms: i64, window: Duration) -> usize {
    let window_ms = i128::try_from(window.as_millis()).unwrap_or(i128::MAX);
    let before = state.consumed.len();
    state
        .consumed
        .retain(|c| i128::from(now_ms) - i128::from(c.issued_at_ms) <= window_ms);
    before - state.consumed.len()
}

/// Marks a token as used. Returns `false` when the fingerprint was already
/// consumed and is still within its window.
pub fn consume_token(
    state: &mut State,
    fingerprint: &str,
    token: &AttendanceToken,
    now_ms: i64,
    window: Duration,
) -> bool {
    prune_consumed(state, now_ms, window);
    if state.consumed.iter().any(|c| c.fingerprint == fingerprint) {
        return false;
    }
    state.consumed.push(ConsumedToken {
        fingerprint: fingerprint.to_string(),
        student_id: token.student_id.clone(),
        issued_at_ms: token.issued_at_ms,
        consumed_at_ms: now_ms,
    });
    true
}
