mod accrual;
mod boot;
mod mock;
mod scheduler;
mod wallet;

pub use accrual::*;
pub use boot::*;
pub use mock::*;
pub use scheduler::*;
pub use wallet::*;
