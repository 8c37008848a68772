use std::io::{BufRead, Write};

use crate::domain::{Error, Money, Operation, OperationSource};

const RULE: &str = "--------------------------------";

/// Interactive menu: prompts on `output`, reads answers from `input`.
pub struct MenuSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn display_menu(&mut self) -> Result<(), Error> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Account Management System")?;
        writeln!(self.output, "1. View Balance")?;
        writeln!(self.output, "2. Credit Account")?;
        writeln!(self.output, "3. Debit Account")?;
        writeln!(self.output, "4. Exit")?;
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    /// Writes `prompt` and reads one line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_amount(&mut self, prompt: &str) -> Result<Option<Money>, Error> {
        match self.ask(prompt)? {
            Some(answer) => answer.parse().map(Some),
            None => Ok(None),
        }
    }

    fn read_operation(&mut self) -> Result<Option<Operation>, Error> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.ask("Enter your choice (1-4): ")? else {
                return Ok(None);
            };

            let op = match choice.as_str() {
                "1" => Some(Operation::ViewBalance),
                "2" => self
                    .ask_amount("Enter credit amount: ")?
                    .map(|amount| Operation::Credit { amount }),
                "3" => self
                    .ask_amount("Enter debit amount: ")?
                    .map(|amount| Operation::Debit { amount }),
                "4" => Some(Operation::Exit),
                _ => {
                    writeln!(self.output, "Invalid choice, please select 1-4.")?;
                    continue;
                }
            };
            return Ok(op);
        }
    }
}

impl<R: BufRead, W: Write> OperationSource for MenuSource<R, W> {
    fn next_operation(&mut self) -> Option<Result<Operation, Error>> {
        self.read_operation().transpose()
    }
}
