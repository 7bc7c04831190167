#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const APACHE_LICENSE: &str = "
                                 Apache License
                           Version 2.0, January 2004
                        http://www.apache.org/licenses/

   TERMS AND CONDITIONS FOR USE, REPRODUCTION, AND DISTRIBUTION
";

pub const MIT_LICENSE: &str = "The MIT License (MIT)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
";

/// A scratch checkout with an isolated HOME; the binary runs with it as cwd.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("repo");
        let home = tmp.path().join("home");
        fs::create_dir_all(&root).expect("create scan root");
        fs::create_dir_all(&home).expect("create isolated home");
        Self {
            _tmp: tmp,
            root,
            home,
        }
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().expect("file has parent")).expect("create parent dirs");
        fs::write(&path, content).expect("write fixture file");
        path
    }

    /// Write `<vendor>/vendor.json` listing `(path, version, revision)` packages.
    pub fn manifest(&self, vendor: &str, packages: &[(&str, &str, &str)]) {
        let package: Vec<serde_json::Value> = packages
            .iter()
            .map(|(path, version, revision)| {
                serde_json::json!({"path": path, "version": version, "revision": revision})
            })
            .collect();
        self.write(
            &format!("{vendor}/vendor.json"),
            &serde_json::json!({ "package": package }).to_string(),
        );
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read output file")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("notice-checkr");
        cmd.current_dir(&self.root)
            .env("HOME", &self.home)
            .env_remove("RUST_LOG");
        cmd
    }
}
