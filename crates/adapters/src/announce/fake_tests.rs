// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_announcer_records_calls() {
    let announcer = FakeAnnouncer::new();

    announcer.announce("Saved", Politeness::Polite);
    announcer.clone().announce("Failed", Politeness::Assertive);

    let calls = announcer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].message, "Saved");
    assert_eq!(calls[1].politeness, Politeness::Assertive);
    assert_eq!(announcer.messages(), vec!["Saved", "Failed"]);
}
