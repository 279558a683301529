// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sk toasts`: drive the toast queue from the terminal

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use sk_adapters::{Announcement, ChannelAnnouncer};
use sk_core::{Politeness, Toast, ToastAction, ToastOptions, ToastVariant};
use sk_engine::{spawn_timer_driver, AnnouncePolicy, ToastConfig, ToastManager};
use std::sync::Arc;
use std::time::Duration;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ToastsArgs {
    #[command(subcommand)]
    pub command: ToastsCommand,
}

#[derive(Subcommand)]
pub enum ToastsCommand {
    /// Push a scripted burst of toasts through the queue and print every change
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Visible capacity (overrides SK_MAX_TOASTS)
    #[arg(long)]
    pub max: Option<usize>,

    /// Default lifetime in milliseconds (overrides SK_TOAST_DURATION_MS)
    #[arg(long = "duration-ms")]
    pub duration_ms: Option<u64>,

    /// When toasts are announced: `immediate` or `on-show` (overrides SK_ANNOUNCE_POLICY)
    #[arg(long)]
    pub announce: Option<AnnouncePolicy>,
}

/// One line of demo output
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum DemoEvent<'a> {
    Visible { toasts: Vec<ToastView<'a>> },
    Announce { message: &'a str, politeness: Politeness },
}

#[derive(Debug, Serialize)]
struct ToastView<'a> {
    id: &'a str,
    variant: ToastVariant,
    title: &'a str,
}

pub async fn handle(command: ToastsCommand, format: OutputFormat) -> Result<()> {
    match command {
        ToastsCommand::Demo(args) => demo(args, format).await,
    }
}

/// Env configuration with command-line overrides applied
pub fn config(args: &DemoArgs) -> ToastConfig {
    let mut config = ToastConfig::from_env();
    if let Some(max) = args.max {
        config.max_visible = max;
    }
    if let Some(ms) = args.duration_ms {
        config.default_duration = Duration::from_millis(ms);
    }
    if let Some(policy) = args.announce {
        config.announce_policy = policy;
    }
    config
}

/// Toasts pushed by the demo, in admission order
pub fn script() -> Vec<ToastOptions> {
    vec![
        ToastOptions::success("Profile saved"),
        ToastOptions::info("Syncing").description("3 files"),
        ToastOptions::warning("Storage almost full").description("92% used"),
        ToastOptions::error("Upload failed")
            .description("network unreachable")
            .action(ToastAction::new("Retry", || tracing::info!("retry requested"))),
        ToastOptions::info("Sync complete"),
    ]
}

/// Text rendering of the visible list
pub fn frame_line(visible: &[Toast]) -> String {
    if visible.is_empty() {
        return "visible: (none)".to_string();
    }
    let toasts: Vec<String> = visible
        .iter()
        .map(|t| format!("[{}] {}", t.variant, t.title))
        .collect();
    format!("visible: {}", toasts.join(" | "))
}

fn print_event(event: &DemoEvent<'_>, format: OutputFormat) {
    let printed = match (format, event) {
        (OutputFormat::Json, event) => print_json(event),
        (OutputFormat::Text, DemoEvent::Announce { message, politeness }) => {
            println!("announce ({politeness}): {message}");
            Ok(())
        }
        (OutputFormat::Text, DemoEvent::Visible { .. }) => Ok(()),
    };
    if let Err(e) = printed {
        tracing::warn!(error = %e, "failed to print demo event");
    }
}

/// Upper bound on how long `count` toasts take to drain one at a time
pub fn drain_deadline(duration: Duration, count: usize) -> Result<Duration> {
    u32::try_from(count)
        .ok()
        .and_then(|n| n.checked_add(1))
        .and_then(|n| duration.checked_mul(n))
        .and_then(|d| d.checked_add(Duration::from_secs(1)))
        .context("--duration-ms is too large for the demo")
}

async fn demo(args: DemoArgs, format: OutputFormat) -> Result<()> {
    let config = config(&args);
    if config.default_duration.is_zero() {
        anyhow::bail!("the demo needs toasts that expire; use a positive --duration-ms");
    }
    let deadline = drain_deadline(config.default_duration, script().len())?;

    let (announcer, mut announcements) = ChannelAnnouncer::new();
    let manager = Arc::new(ToastManager::system(announcer, config));

    let printer = tokio::spawn(async move {
        while let Some(Announcement { message, politeness }) = announcements.recv().await {
            print_event(&DemoEvent::Announce { message: &message, politeness }, format);
        }
    });

    let subscription = manager.subscribe(move |visible| match format {
        OutputFormat::Text => println!("{}", frame_line(visible)),
        OutputFormat::Json => {
            let toasts = visible
                .iter()
                .map(|t| ToastView {
                    id: t.id.as_str(),
                    variant: t.variant,
                    title: &t.title,
                })
                .collect();
            print_event(&DemoEvent::Visible { toasts }, format);
        }
    });

    let driver = spawn_timer_driver(&manager);
    for options in script() {
        manager.add(options);
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    let drained = tokio::time::timeout(deadline, async {
        while manager.stats().visible + manager.stats().queued > 0 {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await;

    driver.abort();
    subscription.unsubscribe();
    drop(manager);
    printer.await.context("announcement printer stopped")?;
    drained.context("toasts did not drain in time")?;
    Ok(())
}

#[cfg(test)]
#[path = "toasts_tests.rs"]
mod tests;
