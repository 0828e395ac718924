use crate::command::Command;

use std::path::PathBuf;
use time::macros::format_description;
use time::UtcOffset;

#[derive(clap::Parser)]
#[command(name = "feedline", about = "Read and write the feed from a terminal")]
pub struct Config {
    /// Base URL of the feed backend API.
    #[arg(long, env = "FEED_API_URL", default_value = "http://localhost:5000/api")]
    pub api_url: reqwest::Url,

    /// JSON file used as the client's local storage.
    #[arg(long, env = "FEED_STORAGE_PATH", default_value = ".feedline/storage.json")]
    pub storage_path: PathBuf,

    /// Offset used when showing post times, like `+09:00`.
    #[arg(long, env = "FEED_UTC_OFFSET", default_value = "+00:00")]
    pub utc_offset: LocalOffset,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LocalOffset(pub UtcOffset);

impl std::str::FromStr for LocalOffset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = format_description!("[offset_hour sign:mandatory]:[offset_minute]");

        Ok(Self(
            UtcOffset::parse(s.trim(), &format)
                .map_err(|e| format!("Failed to parse UTC offset {s:?}: {e}"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_offsets() {
        assert_eq!(LocalOffset(UtcOffset::UTC), "+00:00".parse().unwrap());
        assert_eq!(
            LocalOffset(UtcOffset::from_hms(9, 0, 0).unwrap()),
            "+09:00".parse().unwrap()
        );
        assert_eq!(
            LocalOffset(UtcOffset::from_hms(-5, -30, 0).unwrap()),
            "-05:30".parse().unwrap()
        );
        assert!("9".parse::<LocalOffset>().is_err());
    }

    #[test]
    fn parse_command_line() {
        let config = Config::try_parse_from([
            "feedline",
            "--api-url",
            "http://feed.example.com/api",
            "--utc-offset",
            "+09:00",
            "profile",
            "7",
        ])
        .unwrap();

        assert_eq!("http://feed.example.com/api", config.api_url.as_str());
        assert_eq!(LocalOffset(UtcOffset::from_hms(9, 0, 0).unwrap()), config.utc_offset);
        assert!(matches!(config.command, Command::Profile { user_id: 7 }));
    }
}
