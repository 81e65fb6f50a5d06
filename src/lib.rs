pub mod args;
pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod storage;
pub mod view;
pub mod controller {
    pub mod cache;
    pub mod http_handlers;
    pub mod site;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use controller::cache::{CachedLoader, FetchOptions, PersistedCache};
pub use controller::site::SiteState;
pub use error::AppError;
