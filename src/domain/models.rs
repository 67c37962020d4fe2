use crate::cli::AttendanceStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A single attendance-marking opportunity, as presented by a student device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceToken {
    pub student_id: String,
    pub issued_at_ms: i64,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictOutcome {
    Verified,
    InvalidTokenFormat,
    TokenExpired,
    OutsideGeofence,
    AlreadyUsed,
}

impl VerdictOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictOutcome::Verified => "verified",
            VerdictOutcome::InvalidTokenFormat => "invalid_token_format",
            VerdictOutcome::TokenExpired => "token_expired",
            VerdictOutcome::OutsideGeofence => "outside_geofence",
            VerdictOutcome::AlreadyUsed => "already_used",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationVerdict {
    pub is_verified: bool,
    pub reason: String,
    pub outcome: VerdictOutcome,
}

impl VerificationVerdict {
    pub fn accept(reason: impl Into<String>) -> Self {
        Self {
            is_verified: true,
            reason: reason.into(),
            outcome: VerdictOutcome::Verified,
        }
    }

    pub fn reject(outcome: VerdictOutcome, reason: impl Into<String>) -> Self {
        Self {
            is_verified: false,
            reason: reason.into(),
            outcome,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub student_id: String,
    pub date: String,
    pub subject: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConsumedToken {
    pub fingerprint: String,
    pub student_id: String,
    pub issued_at_ms: i64,
    pub consumed_at_ms: i64,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub consumed: Vec<ConsumedToken>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct CampusConfigFile {
    #[serde(default)]
    pub validity_window_secs: Option<u64>,
    #[serde(default)]
    pub boundary: Option<Vec<Coordinate>>,
}

#[derive(Serialize)]
pub struct IssuedToken {
    pub student_id: String,
    pub issued_at_ms: i64,
    pub coordinate: Coordinate,
    pub token: String,
}

#[derive(Serialize)]
pub struct ContainsReport {
    pub coordinate: Coordinate,
    pub inside: bool,
}

#[derive(Serialize)]
pub struct BoundaryReport {
    pub source: String,
    pub vertex_count: usize,
    pub malformed: bool,
    pub centroid: Option<Coordinate>,
    pub vertices: Vec<Coordinate>,
}

#[derive(Serialize)]
pub struct ConfigReport {
    pub source: String,
    pub from_file: bool,
    pub validity_window_secs: u64,
    pub boundary: Vec<Coordinate>,
}

#[derive(Serialize)]
pub struct VerifyReport {
    pub verdict: VerificationVerdict,
    pub student_id: Option<String>,
    pub elapsed_ms: Option<i64>,
    pub recorded: Option<AttendanceRecord>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct AttendanceSummary {
    pub student_id: String,
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub attendance_percentage: f64,
}
