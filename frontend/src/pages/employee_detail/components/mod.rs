pub mod history;
pub mod profile;

pub use history::{FilterBar, HistoryTable};
pub use profile::ProfileCard;
