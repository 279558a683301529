// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn channel_announcer_forwards_in_order() {
    let (announcer, mut rx) = ChannelAnnouncer::new();

    announcer.announce("first", Politeness::Polite);
    announcer.announce("second", Politeness::Assertive);

    let first = rx.recv().await.unwrap();
    assert_eq!(first.message, "first");
    assert_eq!(first.politeness, Politeness::Polite);

    let second = rx.recv().await.unwrap();
    assert_eq!(second.message, "second");
    assert_eq!(second.politeness, Politeness::Assertive);
}

#[test]
fn channel_announcer_survives_dropped_receiver() {
    let (announcer, rx) = ChannelAnnouncer::new();
    drop(rx);
    announcer.announce("nobody listening", Politeness::Polite);
}

#[test]
fn announcement_serializes_politeness_lowercase() {
    let announcement = Announcement {
        message: "Saved".into(),
        politeness: Politeness::Polite,
    };
    let json = serde_json::to_value(&announcement).unwrap();
    assert_eq!(json["politeness"], "polite");
}
