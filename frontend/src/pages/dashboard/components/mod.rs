pub mod departments;
pub mod recent;
pub mod stats;

pub use departments::DepartmentTags;
pub use recent::RecentEmployees;
pub use stats::StatCards;
