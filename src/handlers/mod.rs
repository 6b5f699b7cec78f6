pub mod balance;
pub mod token;
