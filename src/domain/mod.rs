pub mod error;
pub mod ledger;
pub mod money;
pub mod operation;
pub mod traits;

pub use error::Error;
pub use ledger::Ledger;
pub use money::Money;
pub use operation::{Operation, Outcome};
pub use traits::{OperationSource, Reporter};
