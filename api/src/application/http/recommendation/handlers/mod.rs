pub mod recommend;
pub mod recommend_detailed;
pub mod submit_feedback;
