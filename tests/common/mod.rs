#![allow(dead_code)]
use assert_cmd::Command;
use assert_fs::{TempDir, prelude::*};

/// A fake home directory with an existing `.config/` so the cache is live.
pub fn home_with_config() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child(".config").create_dir_all().unwrap();
    td
}

/// Same, with a cache file already holding `contents`.
pub fn home_with_cache(contents: &str) -> TempDir {
    let td = home_with_config();
    td.child(".config/dof").write_str(contents).unwrap();
    td
}

/// The binary, isolated from the real home and log settings.
pub fn dof_cmd(home: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dof");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}
