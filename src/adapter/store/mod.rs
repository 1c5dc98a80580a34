mod directory;
mod ledger;
mod media;
mod notifications;

pub use directory::*;
pub use ledger::*;
pub use media::*;
pub use notifications::*;
