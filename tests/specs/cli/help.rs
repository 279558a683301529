//! CLI help output specs

use crate::prelude::*;

#[test]
fn sk_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn sk_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("feed")
        .stdout_has("toasts");
}

#[test]
fn sk_feed_help_shows_filters() {
    cli()
        .args(&["feed", "--help"])
        .passes()
        .stdout_has("--search")
        .stdout_has("--category")
        .stdout_has("--pages");
}

#[test]
fn sk_toasts_help_shows_demo() {
    cli().args(&["toasts", "--help"]).passes().stdout_has("demo");
}
