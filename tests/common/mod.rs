use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ON_CAMPUS: (&str, &str) = ("18.2565", "75.7200");
pub const OFF_CAMPUS: (&str, &str) = ("18.3000", "75.7200");

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("attend");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join(".config/attend/campus.toml")
    }

    pub fn write_config(&self, body: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        fs::write(path, body).expect("write campus config");
    }

    pub fn audit_log(&self) -> String {
        fs::read_to_string(self.home.join(".config/attend/audit.jsonl")).unwrap_or_default()
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn issue(&self, student: &str, at: i64, coord: (&str, &str)) -> String {
        let at = at.to_string();
        let out = self.run_json(&["issue", student, "--lat", coord.0, "--lon", coord.1, "--at", &at]);
        out["data"]["token"]
            .as_str()
            .expect("token string")
            .to_string()
    }
}
