pub mod health;
pub mod meals;
pub mod root;
pub mod users;
