pub mod delete_case;
pub mod get_case;
pub mod get_history;
pub mod search_history;
