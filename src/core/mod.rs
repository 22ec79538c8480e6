pub mod ledger;
pub mod payroll;
pub mod reports;
pub mod roster;
pub mod session;
pub mod slip;
pub mod store;
pub mod table;
