use anyhow::{Context, Result};
use std::io::Write;

use crate::output::SlackPayload;

/// Install the rustls crypto provider used by the HTTP client.
///
/// Safe to call more than once; later calls are no-ops.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// POST the payload to a Slack incoming webhook.
///
/// Only transport failures are errors. The response status is returned
/// as-is and not checked.
pub async fn post_webhook(url: &str, payload: &SlackPayload) -> Result<reqwest::StatusCode> {
    let client = reqwest::Client::new();

    let response = client
        .post(url)
        .header("User-Agent", "priority-list")
        .json(payload)
        .send()
        .await
        .context("Failed to post to Slack webhook")?;

    Ok(response.status())
}

/// Write the payload as compact JSON followed by a newline
pub fn write_payload<W: Write>(mut out: W, payload: &SlackPayload) -> Result<()> {
    serde_json::to_writer(&mut out, payload).context("Failed to serialize Slack payload")?;
    writeln!(out).context("Failed to write Slack payload")?;
    Ok(())
}

/// Send the payload to `webhook` when one is configured, otherwise print it to stderr.
pub async fn deliver(webhook: Option<&str>, payload: &SlackPayload) -> Result<()> {
    deliver_to(webhook, payload, std::io::stderr().lock()).await
}

/// Like [`deliver`], but writes to `fallback` when no webhook is configured.
pub async fn deliver_to<W: Write>(
    webhook: Option<&str>,
    payload: &SlackPayload,
    fallback: W,
) -> Result<()> {
    match webhook {
        Some(url) => {
            let status = post_webhook(url, payload).await?;
            tracing::debug!("Slack webhook responded with {}", status);
        }
        None => {
            tracing::debug!("SLACK_WEBHOOK not set, writing payload to stderr");
            write_payload(fallback, payload)?;
        }
    }
    Ok(())
}
