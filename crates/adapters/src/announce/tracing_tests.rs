// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(::tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .finish();
    ::tracing::subscriber::with_default(subscriber, f);
    let bytes = capture.0.lock().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[test]
fn polite_announcement_logs_at_info() {
    let logs = captured(|| TracingAnnouncer::new().announce("Saved", Politeness::Polite));
    assert!(logs.contains("INFO"), "{logs}");
    assert!(logs.contains("politeness=polite"), "{logs}");
    assert!(logs.contains("Saved"), "{logs}");
    assert!(!logs.contains("WARN"), "{logs}");
}

#[test]
fn assertive_announcement_logs_at_warn() {
    let logs = captured(|| {
        TracingAnnouncer::default().announce("Upload failed", Politeness::Assertive)
    });
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("politeness=assertive"), "{logs}");
    assert!(logs.contains("Upload failed"), "{logs}");
}
