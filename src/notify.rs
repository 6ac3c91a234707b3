use log::debug;
use serde::Serialize;

use crate::config::Config;
use crate::error::TrackerError;
use crate::slack::CLIENT;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
    icon_emoji: &'a str,
    username: &'a str,
}

/// Post `text` to the incoming webhook. Fire-and-forget: the response
/// status is logged but never inspected.
pub fn post_message(config: &Config, text: &str) -> Result<(), TrackerError> {
    let payload = WebhookPayload {
        text,
        icon_emoji: &config.icon_emoji,
        username: &config.username,
    };
    let response = CLIENT
        .post(config.slack_webhook_url.clone())
        .json(&payload)
        .send()?;
    debug!("webhook answered {}", response.status());
    Ok(())
}
