use crate::domain::models::{AttendanceToken, VerdictOutcome, VerificationVerdict};
use crate::geofence::GeofenceEngine;
use crate::services::token::decode_token;
use std::time::Duration;

/// Judges a presented token at `now_ms`: freshness first, then location.
///
/// Pure and deterministic. Consumption of a verified token is left to the
/// caller.
pub fn verify(
    token: &AttendanceToken,
    now_ms: i64,
    engine: &GeofenceEngine,
    window: Duration,
) -> VerificationVerdict {
    let window_ms = i128::try_from(window.as_millis()).unwrap_or(i128::MAX);
    let elapsed = i128::from(now_ms) - i128::from(token.issued_at_ms);

    if elapsed < 0 {
        return VerificationVerdict::reject(
            VerdictOutcome::TokenExpired,
            "Invalid QR code: it was issued in the future (check the device clock).",
        );
    }
    if elapsed > window_ms {
        return VerificationVerdict::reject(
            VerdictOutcome::TokenExpired,
            format!(
                "QR code has expired: scanned {}s after it was generated (limit {}s).",
                elapsed / 1000,
                window.as_secs()
            ),
        );
    }

    if !engine.contains(token.coordinate) {
        return VerificationVerdict::reject(
            VerdictOutcome::OutsideGeofence,
            format!(
                "Location ({}, {}) is outside the permitted campus area.",
                token.coordinate.latitude, token.coordinate.longitude
            ),
        );
    }

    VerificationVerdict::accept(format!(
        "Attendance verified for {}: QR code is fresh and location is on campus.",
        token.student_id
    ))
}

/// Decodes untrusted token text and verifies it. Decoding failures become an
/// `invalid_token_format` verdict.
pub fn verify_encoded(
    raw: &str,
    now_ms: i64,
    engine: &GeofenceEngine,
    window: Duration,
) -> (Option<AttendanceToken>, VerificationVerdict) {
    match decode_token(raw) {
        Ok(token) => {
            let verdict = verify(&token, now_ms, engine, window);
            (Some(token), verdict)
        }
        Err(e) => (
            None,
            VerificationVerdict::reject(
                VerdictOutcome::InvalidTokenFormat,
                format!("Invalid or unreadable QR code format: {e}"),
            ),
        ),
    }
}
