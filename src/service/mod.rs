pub mod data_generator;
pub mod date_validator;
pub mod test_helper;
