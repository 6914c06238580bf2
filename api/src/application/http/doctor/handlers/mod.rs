pub mod get_doctors;
