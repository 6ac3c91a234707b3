use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::TrackerError;

pub static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build http client")
});

pub type Channels = Vec<Channel>;

/// One entry of the channel listing. Only `id`, `name`, `created` and
/// `is_archived` drive any logic; the rest rides along into the marker file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub is_channel: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_general: bool,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub num_members: u32,
    #[serde(default)]
    pub topic: Note,
    #[serde(default)]
    pub purpose: Note,
}

// Topic and purpose share a shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub last_set: i64,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    ok: bool,
    #[serde(default)]
    channels: Channels,
    #[serde(default)]
    error: Option<String>,
}

/// Fetch the full channel listing, sorted ascending by creation time.
pub fn list_channels(config: &Config) -> Result<Channels, TrackerError> {
    let body = CLIENT
        .get(config.channel_list_url.clone())
        .query(&[
            ("token", config.slack_api_token.as_str()),
            ("exclude_archived", "true"),
        ])
        .send()?
        .text()?;
    parse_listing(&body)
}

fn parse_listing(body: &str) -> Result<Channels, TrackerError> {
    let listing: ChannelListResponse = serde_json::from_str(body)?;
    if !listing.ok {
        return Err(TrackerError::Api(
            listing.error.unwrap_or_else(|| "unknown error".into()),
        ));
    }
    let mut channels = listing.channels;
    channels.sort_by_key(|channel| channel.created);
    Ok(channels)
}
