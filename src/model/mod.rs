pub mod announcement;
pub mod event;
pub mod intramurals;
pub mod officer;
pub mod team;
pub mod utils;

pub use announcement::*;
pub use event::*;
pub use intramurals::*;
pub use officer::*;
pub use team::*;
pub use utils::*;
