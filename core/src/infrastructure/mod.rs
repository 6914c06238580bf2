pub mod db;
pub mod disease;
pub mod doctor;
pub mod health;
pub mod history;
pub mod llm;
pub mod user;
