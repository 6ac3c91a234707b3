use std::path::PathBuf;

use color_eyre::eyre::Context;
use reqwest::Url;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub slack_api_token: String,
    pub slack_webhook_url: Url,
    pub latest_channel_json_path: PathBuf,
    #[serde(default = "default_channel_list_url")]
    pub channel_list_url: Url,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_icon_emoji")]
    pub icon_emoji: String,
    pub sentry_dsn: Option<String>,
}

fn default_channel_list_url() -> Url {
    Url::parse("https://slack.com/api/channels.list").unwrap()
}

fn default_username() -> String {
    "New Channel Report".into()
}

fn default_icon_emoji() -> String {
    ":new:".into()
}

impl Config {
    pub fn from_env() -> color_eyre::Result<Self> {
        envy::from_env::<Self>().wrap_err("failed to load config")
    }
}
