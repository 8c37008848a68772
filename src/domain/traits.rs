use crate::domain::{Error, Operation, Outcome};

/// Yields operations one at a time; `None` once the input is exhausted.
pub trait OperationSource {
    fn next_operation(&mut self) -> Option<Result<Operation, Error>>;
}

pub trait Reporter {
    fn report(&mut self, outcome: &Outcome) -> Result<(), Error>;

    fn reject(&mut self, error: &Error) -> Result<(), Error>;
}
