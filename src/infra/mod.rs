pub mod backend;
pub mod payment;
