//! Line-oriented front end for a [`TipSession`].
//!
//! Reads one [`Command`] per line, applies it to the session and redraws
//! the screen. Works over any `BufRead`/`Write` pair so it can be driven by
//! a terminal, a script file or a test.

use std::io::{self, BufRead, Write};

use tip_core::{
    Action, BillAmountError, InputValidator, TipPercentage, TipSession, ValidationOutcome,
    ValidationPolicy, calculate_tip, format_currency,
};
use tracing::{debug, info, warn};

use crate::{
    commands::{Command, HELP},
    logging,
    screen::render,
};

pub const PROMPT: &str = "> ";

pub struct Shell {
    session: TipSession,
    currency_symbol: String,
}

impl Shell {
    pub fn new(
        policy: ValidationPolicy,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            session: TipSession::new(policy),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn session(&self) -> &TipSession {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> io::Result<()> {
        info!(policy = %self.session.policy(), "calculator session started");
        write!(output, "{}", render(&self.session, &self.currency_symbol))?;

        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let command = match line.trim_end_matches(['\r', '\n']).parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    warn!(input = %line.trim_end(), "{e}");
                    writeln!(output, "error: {e}")?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }
            if self.execute(command, output)? {
                write!(output, "{}", render(&self.session, &self.currency_symbol))?;
            }
        }

        info!("calculator session ended");
        Ok(())
    }

    /// Applies one command. Returns `true` when the screen should be
    /// redrawn.
    fn execute<W: Write>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> io::Result<bool> {
        match command {
            Command::Bill(text) => {
                self.session.edit_bill(&text);
            }
            Command::Slide(position) => {
                self.session.slide(position);
            }
            Command::Percent(percentage) => self.session.set_percentage(percentage),
            Command::Calculate => return self.press(Action::Calculate, output),
            Command::Reset => return self.press(Action::Reset, output),
            Command::Done => {
                debug!(bill = %self.session.bill().text(), "bill field submitted");
                writeln!(output, "Bill amount entered.")?;
                return Ok(false);
            }
            Command::Show => {}
            Command::Log(directive) => {
                match logging::set_log_level(&directive) {
                    Ok(()) => writeln!(output, "Log filter set to '{directive}'.")?,
                    Err(e) => writeln!(output, "error: {e}")?,
                }
                return Ok(false);
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                return Ok(false);
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Presses an action button, refusing buttons that are not on screen.
    fn press<W: Write>(
        &mut self,
        action: Action,
        output: &mut W,
    ) -> io::Result<bool> {
        let offered = self.session.available_action();
        if action != offered {
            writeln!(
                output,
                "error: '{}' is not available; press '{}' instead",
                action.label(),
                offered.label()
            )?;
            return Ok(false);
        }

        match action {
            Action::Calculate => {
                let tip = self.session.calculate();
                info!(
                    bill = %self.session.bill().text(),
                    percentage = %self.session.percentage(),
                    tip,
                    "tip calculated"
                );
            }
            Action::Reset => self.session.reset(),
        }
        Ok(true)
    }
}

/// Calculates a single tip and formats it for display.
///
/// Under the strict policy, text the validator would flag is an error
/// rather than a zero bill.
pub fn quote(
    bill_text: &str,
    percentage: TipPercentage,
    policy: ValidationPolicy,
    currency_symbol: &str,
) -> Result<String, BillAmountError> {
    if let ValidationOutcome::Flagged(e) | ValidationOutcome::Rejected(e) =
        InputValidator::new(policy).validate(bill_text)
    {
        return Err(e);
    }
    let tip = calculate_tip(bill_text, percentage);
    Ok(format!("Tip Amount: {}", format_currency(tip, currency_symbol)))
}
