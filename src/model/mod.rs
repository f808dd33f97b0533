pub mod journal;
pub mod report;
pub mod validator;
