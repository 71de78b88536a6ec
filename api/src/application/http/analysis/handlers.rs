pub mod generate_sample_data;
pub mod run_analysis;
