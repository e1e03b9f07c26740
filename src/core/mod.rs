pub mod dispatcher;
pub mod formatters;
