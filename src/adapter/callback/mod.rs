mod ledger_projection;
mod notifier;

pub use ledger_projection::*;
pub use notifier::*;
