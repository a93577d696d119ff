use chrono::{DateTime, Local};
use std::{process::Command, time::SystemTime};

fn exe_cmd(cmd: &mut Command) -> anyhow::Result<String> {
    let output = cmd.output()?;

    if !output.status.success() {
        anyhow::bail!("{}", String::from_utf8(output.stderr)?);
    }
    Ok(String::from_utf8(output.stdout)?)
}

fn main() {
    // empty outside a git checkout, e.g. when built from a source archive
    let git_commit_hash = exe_cmd(Command::new("git").args([
        "log",
        "-n",
        "1",
        "--pretty=format:%H",
    ]))
    .map(|s| s[..8.min(s.len())].trim().to_string())
    .unwrap_or_default();

    let build_date = DateTime::<Local>::from(SystemTime::now()).format("%Y/%m/%d-%H:%M:%S:%Z");

    if git_commit_hash.is_empty() {
        println!(
            "cargo:rustc-env=RSALAB_VERSION_INFO={}-{}",
            env!("CARGO_PKG_VERSION"),
            build_date
        );
    } else {
        println!(
            "cargo:rustc-env=RSALAB_VERSION_INFO={}-{}-{}",
            env!("CARGO_PKG_VERSION"),
            build_date,
            git_commit_hash
        );
    }
}
