pub mod alert;
pub mod quote;
