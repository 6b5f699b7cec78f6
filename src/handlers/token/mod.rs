pub mod dto;
pub mod service;
pub mod token;

pub use dto::*;
pub use token::*;
