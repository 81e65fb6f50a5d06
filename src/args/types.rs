use clap::Parser;
use std::path::PathBuf;

use crate::model::LayoutItem;

/// Officers page layout loaded from `--officers-layout`.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficersLayout(pub Vec<LayoutItem>);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding officers.json, events.json, announcements.json and intramurals.json.
    #[arg(long, value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
    /// Fetch the data files from this http(s) origin instead of the data directory.
    #[arg(long, value_name = "DATA_URL", value_parser = crate::args::validation::check_http_url)]
    pub data_url: Option<String>,
    /// If specified, cached data files are also written here and survive restarts.
    #[arg(long, value_name = "CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
    /// Always re-read the data files.
    #[arg(long)]
    pub no_cache: bool,
    /// Json list of dividers and rows of officer names for the officers page.
    #[arg(
        long,
        value_name = "OFFICERS_LAYOUT",
        value_parser = crate::args::validation::check_readable_layout_json
    )]
    pub officers_layout: Option<OfficersLayout>,
    #[arg(long, value_name = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub data_dir: PathBuf,
    pub data_url: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub cache_enabled: bool,
    pub officers_layout: Option<Vec<LayoutItem>>,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl CleanArgs {
    /// Settings for serving `data_dir` with defaults everywhere else.
    #[must_use]
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            data_url: None,
            cache_dir: None,
            cache_enabled: true,
            officers_layout: None,
            static_dir: PathBuf::from("static"),
            host: "0.0.0.0".to_string(),
            port: 5201,
        }
    }
}
