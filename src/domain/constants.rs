/// Reference campus polygon (NW, NE, SE, SW corners), used when no
/// `campus.toml` is present.
pub const REFERENCE_CAMPUS_POLYGON: [(f64, f64); 4] = [
    (18.25815, 75.71890),
    (18.25745, 75.72242),
    (18.25435, 75.72175),
    (18.25525, 75.71830),
];

pub const DEFAULT_VALIDITY_WINDOW_SECS: u64 = 60;

pub const CONFIG_DIR: &str = ".config/attend";
pub const CONFIG_FILE_NAME: &str = "campus.toml";
pub const STATE_FILE_NAME: &str = "state.json";
pub const AUDIT_FILE_NAME: &str = "audit.jsonl";
