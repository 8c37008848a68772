use crate::domain::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ViewBalance,
    Credit { amount: Money },
    Debit { amount: Money },
    Exit,
}

/// Result of applying an [`Operation`], carrying the balance after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Balance(Money),
    Credited(Money),
    Debited(Money),
    Exit,
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Balance(balance) => write!(f, "Current balance: {}", balance),
            Outcome::Credited(balance) => {
                write!(f, "Amount credited. New balance: {}", balance)
            }
            Outcome::Debited(balance) => write!(f, "Amount debited. New balance: {}", balance),
            Outcome::Exit => write!(f, "Exiting the program. Goodbye!"),
        }
    }
}
