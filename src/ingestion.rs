use std::io::Read;

use serde::Deserialize;

use crate::domain::{Error, Money, Operation, OperationSource};

/// Replays operations from CSV rows of `type,amount`.
pub struct CsvScript<R: Read> {
    rows: csv::DeserializeRecordsIntoIter<R, CsvRow>,
}

impl<R: Read> CsvScript<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self {
            rows: rdr.into_deserialize(),
        }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    amount: Option<String>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let amount = row.amount.filter(|a| !a.is_empty());

        let op = match (row.kind.to_ascii_lowercase().as_str(), amount) {
            ("view", None) => Operation::ViewBalance,
            ("credit", Some(amount)) => Operation::Credit {
                amount: amount.parse::<Money>()?,
            },
            ("debit", Some(amount)) => Operation::Debit {
                amount: amount.parse::<Money>()?,
            },
            ("view", Some(_)) => {
                return Err(Error::Ingestion("view takes no amount".to_string()));
            }
            (kind @ ("credit" | "debit"), None) => {
                return Err(Error::Ingestion(format!("{} requires an amount", kind)));
            }
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(op)
    }
}

impl<R: Read> OperationSource for CsvScript<R> {
    fn next_operation(&mut self) -> Option<Result<Operation, Error>> {
        let row = self.rows.next()?;

        Some(match row {
            Ok(row) => Operation::try_from(row),
            Err(e) => Err(Error::Ingestion(format!(
                "CSV deserialization error: {}",
                e
            ))),
        })
    }
}
