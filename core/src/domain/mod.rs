pub mod common;
pub mod disease;
pub mod doctor;
pub mod health;
pub mod history;
pub mod recommendation;
pub mod user;
