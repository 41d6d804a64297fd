pub mod card;
pub mod search;

pub use card::EmployeeCard;
pub use search::SearchBar;
