pub mod employee;
pub mod payout;
pub mod period;
pub mod record;
pub mod status;
