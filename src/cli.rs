use std::path::PathBuf;

use clap::Parser;

/// Terminal portfolio with scroll-triggered reveal animations.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "devfolio", version, about)]
pub struct Cli {
    /// Config file (default: <config_dir>/devfolio/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Portfolio content as TOML; overrides the config's `content`
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Print display snapshots as JSON lines instead of opening the TUI
    #[arg(long)]
    pub headless: bool,

    /// Virtual time to run in headless mode, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 4000)]
    pub until_ms: u64,

    /// Frame interval in milliseconds; overrides `animation.frame_ms`
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,

    /// Log level filter; overrides `logging.level` (RUST_LOG still wins)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["devfolio"]).unwrap();
        assert!(!cli.headless);
        assert_eq!(cli.until_ms, 4000);
        assert_eq!(cli.frame_ms, None);
    }

    #[test]
    fn headless_flags() {
        let cli = Cli::try_parse_from([
            "devfolio",
            "--headless",
            "--until-ms",
            "1500",
            "--frame-ms",
            "16",
            "--content",
            "site.toml",
        ])
        .unwrap();
        assert!(cli.headless);
        assert_eq!(cli.until_ms, 1500);
        assert_eq!(cli.frame_ms, Some(16));
        assert_eq!(cli.content, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Cli::try_parse_from(["devfolio", "--watch"]).is_err());
    }
}
