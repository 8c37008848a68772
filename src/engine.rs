use tracing::{debug, warn};

use crate::domain::{Error, Ledger, Operation, OperationSource, Outcome, Reporter};

#[derive(Debug)]
pub struct Engine<S, R>
where
    S: OperationSource,
    R: Reporter,
{
    ledger: Ledger,
    source: S,
    reporter: R,
}

impl<S, R> Engine<S, R>
where
    S: OperationSource,
    R: Reporter,
{
    pub fn new(source: S, reporter: R) -> Self {
        Self {
            ledger: Ledger::new(),
            source,
            reporter,
        }
    }

    /// Runs until the source is exhausted or an exit is requested.
    /// Only unrecoverable errors are returned; the rest go to the reporter.
    pub fn process(&mut self) -> Result<(), Error> {
        while let Some(op) = self.source.next_operation() {
            let result = op.and_then(|op| self.apply_operation(op));

            match result {
                Ok(outcome) => {
                    self.reporter.report(&outcome)?;
                    if outcome == Outcome::Exit {
                        break;
                    }
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "operation rejected");
                    self.reporter.reject(&e)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<Outcome, Error> {
        debug!(?op, balance = %self.ledger.balance(), "applying operation");

        match op {
            Operation::ViewBalance => Ok(Outcome::Balance(self.ledger.balance())),
            Operation::Credit { amount } => self.ledger.credit(amount).map(Outcome::Credited),
            Operation::Debit { amount } => self.ledger.debit(amount).map(Outcome::Debited),
            Operation::Exit => Ok(Outcome::Exit),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
