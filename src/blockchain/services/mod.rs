pub mod address;
pub mod transactions;
pub mod units;
