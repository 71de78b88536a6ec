pub mod relay_message;
pub mod send_test_message;
