use tracing::debug;

use crate::domain::{Error, Money};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: Money, // always within [0, Money::MAX]
}

impl Ledger {
    pub const INITIAL_BALANCE: Money = Money::from_units(1000);

    pub fn new() -> Self {
        Self {
            balance: Self::INITIAL_BALANCE,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds `amount`, clamping the result at [`Money::MAX`].
    pub fn credit(&mut self, amount: Money) -> Result<Money, Error> {
        Self::validate(amount)?;

        let next = self.balance + amount;
        if next > Money::MAX {
            debug!(%next, "balance clamped at limit");
            self.balance = Money::MAX;
        } else {
            self.balance = next;
        }
        Ok(self.balance)
    }

    /// Subtracts `amount`; the balance is left untouched when funds are short.
    pub fn debit(&mut self, amount: Money) -> Result<Money, Error> {
        Self::validate(amount)?;

        if amount > self.balance {
            return Err(Error::InsufficientFunds);
        }
        self.balance = self.balance - amount;
        Ok(self.balance)
    }

    pub fn reset(&mut self) {
        self.balance = Self::INITIAL_BALANCE;
    }

    fn validate(amount: Money) -> Result<(), Error> {
        if amount.is_negative() {
            return Err(Error::InvalidAmount);
        }
        if amount > Money::MAX {
            return Err(Error::AmountExceedsLimit);
        }
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
