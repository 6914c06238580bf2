pub mod diseases;
pub mod doctors;
pub mod follow_ups;
pub mod recommendations;
pub mod users;
