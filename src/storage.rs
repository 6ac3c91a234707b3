use std::fs;
use std::io;
use std::path::Path;

use crate::error::TrackerError;
use crate::slack::Channel;

/// Load the most recently seen channel. `None` means no marker file exists
/// yet (first run); anything else wrong with the file is an error.
pub fn load_latest_channel(path: &Path) -> Result<Option<Channel>, TrackerError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

pub fn write_latest_channel(path: &Path, channel: &Channel) -> Result<(), TrackerError> {
    fs::write(path, serde_json::to_string(channel)?)?;
    Ok(())
}
