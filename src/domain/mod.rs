pub mod donor;
pub mod order;
pub mod ports;
pub mod session;
pub mod tier;
