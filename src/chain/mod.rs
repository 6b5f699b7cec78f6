pub mod address;
pub mod contracts;
pub mod erc20;
pub mod provider;
pub mod units;

pub use address::*;
pub use erc20::*;
pub use provider::*;
pub use units::*;
