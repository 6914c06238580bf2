pub mod close_case;
pub mod get_case_timeline;
pub mod get_cases;
