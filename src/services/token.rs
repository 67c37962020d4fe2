use crate::domain::models::{AttendanceToken, Coordinate};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// JSON shape scanned from the QR code.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireToken {
    student_id: String,
    timestamp: i64,
    location: Coordinate,
}

#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token has an empty student id")]
    EmptyStudentId,
    #[error("token location is not a finite coordinate")]
    NonFiniteCoordinate,
}

pub fn encode_token(token: &AttendanceToken) -> anyhow::Result<String> {
    let wire = WireToken {
        student_id: token.student_id.clone(),
        timestamp: token.issued_at_ms,
        location: token.coordinate,
    };
    Ok(STANDARD.encode(serde_json::to_vec(&wire)?))
}

pub fn decode_token(raw: &str) -> Result<AttendanceToken, TokenError> {
    let bytes = STANDARD.decode(raw.trim())?;
    let wire: WireToken = serde_json::from_slice(&bytes)?;
    if wire.student_id.trim().is_empty() {
        return Err(TokenError::EmptyStudentId);
    }
    if !wire.location.is_finite() {
        return Err(TokenError::NonFiniteCoordinate);
    }
    Ok(AttendanceToken {
        student_id: wire.student_id,
        issued_at_ms: wire.timestamp,
        coordinate: wire.location,
    })
}

/// Stable identity of a token for the consumption ledger. Derived from the
/// decoded student and issue instant, so re-encodings of the same payload
/// share a fingerprint.
pub fn token_fingerprint(token: &AttendanceToken) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.student_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(token.issued_at_ms.to_be_bytes());
    hex::encode(hasher.finalize())
}
