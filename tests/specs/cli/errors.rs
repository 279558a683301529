//! CLI error specs

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["frobnicate"]).fails().stderr_has("frobnicate");
}

#[test]
fn invalid_base_url_is_reported() {
    cli()
        .args(&["feed", "--base-url", "not a url"])
        .fails()
        .stderr_has("invalid base URL");
}

#[test]
fn sticky_demo_is_rejected() {
    cli()
        .args(&["toasts", "demo", "--duration-ms", "0"])
        .fails()
        .stderr_has("positive");
}

#[test]
fn unknown_announce_policy_is_rejected() {
    cli()
        .args(&["toasts", "demo", "--announce", "sometimes"])
        .fails()
        .stderr_has("sometimes");
}
