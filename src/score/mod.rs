pub mod score_aggregators;
pub mod sort_utils;
pub mod standings;

pub use score_aggregators::*;
pub use sort_utils::*;
pub use standings::*;
