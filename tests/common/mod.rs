use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub store: PathBuf,
}

impl TestEnv {
    /// Isolated `$HOME` + a fixture store in a consistent, secure state:
    /// one owner (`o@x.com`, the designated owner), one allowlisted admin,
    /// one member.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let store = make_fixture_store(tmp.path());
        write_config(&home, "o@x.com", &store);

        Self {
            _tmp: tmp,
            home,
            store,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("roleaudit");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// For commands that print a full report and then exit non-zero
    /// (an insecure `verify`).
    pub fn run_json_expect_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_user(&self, id: &str, email: &str, role: &str) {
        fs::write(
            self.store.join("users").join(format!("{}.json", id)),
            serde_json::json!({"email": email, "role": role}).to_string(),
        )
        .expect("write user document");
    }

    pub fn write_user_fields(&self, id: &str, fields: Value) {
        fs::write(
            self.store.join("users").join(format!("{}.json", id)),
            fields.to_string(),
        )
        .expect("write user document");
    }

    pub fn write_policy(&self, emails: &[&str]) {
        fs::write(
            self.store.join("config/admin.json"),
            serde_json::json!({ "emails": emails }).to_string(),
        )
        .expect("write policy document");
    }

    pub fn remove_policy(&self) {
        fs::remove_file(self.store.join("config/admin.json")).expect("remove policy document");
    }
}

pub fn make_fixture_store(base: &Path) -> PathBuf {
    let store = base.join("store");

    fs::create_dir_all(store.join("config")).expect("create config collection");
    fs::create_dir_all(store.join("users")).expect("create users collection");

    fs::write(
        store.join("config/admin.json"),
        serde_json::json!({"emails": ["a@x.com"]}).to_string(),
    )
    .expect("write policy document");
    fs::write(
        store.join("users/owner.json"),
        serde_json::json!({"email": "o@x.com", "role": "owner", "name": "Olive"}).to_string(),
    )
    .expect("write owner document");
    fs::write(
        store.join("users/admin-a.json"),
        serde_json::json!({"email": "a@x.com", "role": "admin", "name": "Ada"}).to_string(),
    )
    .expect("write admin document");
    fs::write(
        store.join("users/member-m.json"),
        serde_json::json!({"email": "m@x.com", "role": "member"}).to_string(),
    )
    .expect("write member document");

    store
}

fn write_config(home: &Path, owner: &str, store: &Path) {
    let dir = home.join(".config/roleaudit");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(
        dir.join("config.toml"),
        format!(
            "designated_owner = \"{}\"\nstore_source = \"{}\"\n",
            owner,
            store.display()
        ),
    )
    .expect("write config file");
}
