//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use serde_json::Value;
use sk_adapters::{FakeAnnouncer, FakeFetchAdapter, OffsetAdapter};
use sk_core::{FakeClock, SequentialIdGen, Toast};
use sk_engine::{Pager, ToastConfig, ToastManager};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub use sk_core::{Filters, ToastOptions};

// ── Library fixtures ────────────────────────────────────────────────────────

pub type Manager = ToastManager<FakeAnnouncer, FakeClock, SequentialIdGen>;

/// Manager on a fake clock, with its announcer and clock handles
pub struct Toasts {
    pub manager: Manager,
    pub announcer: FakeAnnouncer,
    pub clock: FakeClock,
}

pub fn toasts(max_visible: usize) -> Toasts {
    let announcer = FakeAnnouncer::new();
    let clock = FakeClock::new();
    let manager = ToastManager::new(
        announcer.clone(),
        clock.clone(),
        SequentialIdGen::default(),
        ToastConfig {
            max_visible,
            ..ToastConfig::default()
        },
    );
    Toasts {
        manager,
        announcer,
        clock,
    }
}

pub fn titles(toasts: &[Toast]) -> Vec<String> {
    toasts.iter().map(|t| t.title.clone()).collect()
}

pub type ProductPager = Pager<OffsetAdapter<Value>, FakeFetchAdapter>;

/// Pager over `https://dummyjson.com/products` with 20 items per page
pub fn product_pager() -> (ProductPager, FakeFetchAdapter) {
    let fetch = FakeFetchAdapter::new();
    let adapter = OffsetAdapter::new("https://dummyjson.com", "products", 20).unwrap();
    (Pager::new(adapter, fetch.clone()), fetch)
}

// ── CLI runner ──────────────────────────────────────────────────────────────

/// Returns the path to a binary, checking the llvm-cov target directory first
/// and falling back to the directory holding the test binary.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Create a CLI builder for sk commands
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new() }
}

pub struct CliBuilder {
    args: Vec<String>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn command(self) -> Command {
        let mut cmd = Command::new(binary_path("sk"));
        cmd.args(&self.args);
        for var in sk_engine::env::ALL {
            cmd.env_remove(var);
        }
        cmd.env("RUST_LOG", "warn");
        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}
