#![allow(dead_code)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

pub const THREE_DEBTS: &str = r#"{
  "version": 1,
  "debts": [
    {"name": "Visa", "type": "credit_card", "balance": 5000, "apr": 18, "min_payment": 100},
    {"name": "Store card", "type": "credit_card", "balance": 2000, "apr": 22, "min_payment": 50},
    {"name": "Car loan", "type": "loan", "balance": 10000, "apr": 8, "min_payment": 200}
  ]
}"#;

/// Isolated working directory with a colourless config and a debts file.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(debts_json: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(
            dir.path().join("config.json"),
            r#"{"locale": "en-US", "currency": "USD", "ui_color_enabled": false}"#,
        )
        .expect("write config");
        fs::write(dir.path().join("debts.json"), debts_json).expect("write debts");
        Self { dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    pub fn debts_path(&self) -> PathBuf {
        self.dir.path().join("debts.json")
    }

    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("debt_payoff_cli").expect("binary");
        cmd.env("DEBT_PAYOFF_CONFIG", self.config_path())
            .env("RUST_LOG", "off");
        cmd
    }
}
