// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toast notification model.
//!
//! [`ToastOptions`] is what a producer hands to the manager; [`Toast`] is the
//! admitted notification with an id assigned and every default resolved.

pub use crate::id::ToastId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default time a toast stays visible before auto-dismissal
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastVariant {
    /// Errors jump the queue and interrupt screen readers.
    pub fn is_error(self) -> bool {
        matches!(self, ToastVariant::Error)
    }

    /// Announcement priority used when a toast does not override it
    pub fn default_politeness(self) -> Politeness {
        if self.is_error() {
            Politeness::Assertive
        } else {
            Politeness::Polite
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
            ToastVariant::Warning => "warning",
            ToastVariant::Info => "info",
        }
    }
}

impl fmt::Display for ToastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assistive-technology announcement priority (ARIA live-region politeness)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

impl fmt::Display for Politeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button attached to a toast
#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Arc::new(callback),
        }
    }

    /// Run the action callback
    pub fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Producer-side description of a toast.
///
/// Unset fields are filled in by the manager at admission time.
#[derive(Debug, Clone)]
pub struct ToastOptions {
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
    /// `Some(Duration::ZERO)` keeps the toast until dismissed
    pub duration: Option<Duration>,
    pub action: Option<ToastAction>,
    pub announce: Option<bool>,
    pub politeness: Option<Politeness>,
}

impl ToastOptions {
    pub fn new(variant: ToastVariant, title: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            description: None,
            duration: None,
            action: None,
            announce: None,
            politeness: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Info, title)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    /// Never auto-dismiss
    pub fn sticky(self) -> Self {
        self.duration(Duration::ZERO)
    }

    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Skip the screen-reader announcement
    pub fn silent(mut self) -> Self {
        self.announce = Some(false);
        self
    }

    pub fn politeness(mut self, politeness: Politeness) -> Self {
        self.politeness = Some(politeness);
        self
    }

    /// Resolve defaults and attach an id
    pub fn into_toast(self, id: ToastId, default_duration: Duration) -> Toast {
        Toast {
            id,
            variant: self.variant,
            politeness: self
                .politeness
                .unwrap_or_else(|| self.variant.default_politeness()),
            title: self.title,
            description: self.description,
            duration: self.duration.unwrap_or(default_duration),
            action: self.action,
            announce: self.announce.unwrap_or(true),
        }
    }
}

/// An admitted toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
    pub duration: Duration,
    pub action: Option<ToastAction>,
    pub announce: bool,
    pub politeness: Politeness,
}

impl Toast {
    /// Whether this toast is removed by a timer at all
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    /// Text read out by assistive technology
    pub fn announcement(&self) -> String {
        match &self.description {
            Some(description) if !description.is_empty() => {
                format!("{}: {}", self.title, description)
            }
            _ => self.title.clone(),
        }
    }
}

#[cfg(test)]
#[path = "toast_tests.rs"]
mod tests;
