// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn noop_announce_accepts_anything() {
    let announcer = NoOpAnnouncer::new();
    announcer.announce("saved", Politeness::Polite);
    announcer.announce("failed", Politeness::Assertive);
}

#[test]
fn noop_announcer_default() {
    let announcer = NoOpAnnouncer::default();
    assert!(std::mem::size_of_val(&announcer) == 0);
}
