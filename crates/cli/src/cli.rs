use std::path::PathBuf;

use bstart::LaunchMode;
use clap::Parser;

use crate::styles::cli_styles;

#[derive(Parser, Debug)]
#[command(name = "bstart")]
#[command(about = "Open URLs in one or more installed browsers")]
#[command(
    long_about = "Open URLs in one or more installed browsers.\n\
                  If no URLs are provided, only the start page is opened."
)]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
    /// Name of a detected browser to use (repeatable)
    #[arg(short = 'n', long = "browser-name", value_name = "NAME")]
    pub browser_name: Vec<String>,

    /// Path to a browser executable to use (repeatable)
    #[arg(short = 'p', long = "browser-path", value_name = "PATH")]
    pub browser_path: Vec<PathBuf>,

    /// Run launch profiles from a parameter file (YAML, JSON, or TOML).
    /// Without a value, ~/.bstart/parameter.yaml is used.
    #[arg(short = 'P', long = "parameter-file", value_name = "FILE", num_args = 0..=1)]
    pub parameter_file: Option<Option<PathBuf>>,

    /// Fast mode: open all URLs concurrently (order not guaranteed)
    #[arg(short = 'f', long)]
    pub fast: bool,

    /// Ordered mode: open URLs one at a time in input order (default)
    #[arg(short = 'o', long, conflicts_with = "fast")]
    pub ordered: bool,

    /// List the detected browsers and exit
    #[arg(short = 'l', long = "browser-list")]
    pub browser_list: bool,

    /// URL to open (repeatable; the flag may also be omitted)
    #[arg(short = 'u', long = "urls", value_name = "URL")]
    pub urls: Vec<String>,

    /// URLs to open, without the --urls flag
    #[arg(value_name = "URLS")]
    pub url_args: Vec<String>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn mode(&self) -> LaunchMode {
        if self.fast {
            LaunchMode::Fast
        } else {
            LaunchMode::Ordered
        }
    }
}
