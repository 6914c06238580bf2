pub mod get_diseases;
