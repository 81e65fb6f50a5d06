use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, OfficersLayout};

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let xx = Args::parse();
    xx.validate()?;
    Ok(CleanArgs::new(xx))
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if neither a readable data directory nor a data url is configured
    pub fn validate(&self) -> Result<(), String> {
        if self.data_url.is_none() && !self.data_dir.is_dir() {
            return Err(format!(
                "The data directory '{}' does not exist; pass --data-dir or --data-url.",
                self.data_dir.display()
            ));
        }
        if self.cache_dir.is_some() && self.no_cache {
            return Err("--cache-dir has no effect together with --no-cache.".to_string());
        }
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            data_dir: args.data_dir,
            data_url: args.data_url,
            cache_dir: args.cache_dir,
            cache_enabled: !args.no_cache,
            officers_layout: args.officers_layout.map(|l| l.0),
            static_dir: args.static_dir,
            host: args.host,
            port: args.port,
        }
    }
}
