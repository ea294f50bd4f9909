pub mod groceries;
pub mod users;
