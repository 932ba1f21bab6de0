//! Custom cargo commands for the pbt toolkit.
//!
//! Usage:
//!   cargo xtask verify              - Run full verification suite
//!   cargo xtask test                - Run all tests
//!   cargo xtask check               - Quick check (check + test + clippy)
//!   cargo xtask fuzz <target> [s]   - Run one cargo-fuzz target
//!   cargo xtask bench               - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Default fuzzing time per target, in seconds.
const DEFAULT_FUZZ_SECS: u64 = 60;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("fuzz") => {
            let target = args.next().context("fuzz needs a target name, see fuzz/Cargo.toml")?;
            let secs = match args.next() {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("fuzz duration {:?} is not a number of seconds", raw))?,
                None => DEFAULT_FUZZ_SECS,
            };
            fuzz(&target, secs)?
        }
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify              Run full verification suite (contracts + tests + clippy)
  test                Run all Rust tests
  check               Quick check (cargo check + test + clippy)
  fuzz <target> [s]   Fuzz one target for s seconds (default {})
  bench               Run benchmarks
"#,
        DEFAULT_FUZZ_SECS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("pbt-toolkit Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/4] Running debug tests (contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Debug tests passed\n");

    println!("[3/4] Running release tests (contracts off)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run one fuzz target (needs nightly and cargo-fuzz)
fn fuzz(target: &str, secs: u64) -> Result<()> {
    let max_time = format!("-max_total_time={}", secs);
    run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every public function must still be guarded by its postcondition.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;

    let count = contracts.matches("\"Contract violation:").count();
    if count < 6 {
        bail!(
            "Expected at least 6 contract checks, found {}. Someone may have removed a postcondition!",
            count
        );
    }

    Ok(())
}
