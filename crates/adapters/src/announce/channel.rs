// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Announcer that forwards announcements over a tokio channel.
//!
//! A rendering layer owns the receiving end and writes each message into its
//! live region. Sends never block; once the receiver is gone announcements
//! are dropped with a debug log.

use super::{AnnounceAdapter, Announcement};
use sk_core::Politeness;
use tokio::sync::mpsc;

#[derive(Clone, Debug)]
pub struct ChannelAnnouncer {
    tx: mpsc::UnboundedSender<Announcement>,
}

impl ChannelAnnouncer {
    /// Create an announcer together with the receiver that drains it
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Announcement>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AnnounceAdapter for ChannelAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        let announcement = Announcement {
            message: message.to_string(),
            politeness,
        };
        if self.tx.send(announcement).is_err() {
            tracing::debug!(text = message, "announcement receiver closed, dropping");
        }
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
