//! Console input source for the interactive player.
//!
//! [`ConsoleChoices`] renders the table and the turn menu to the output
//! stream and reads one menu choice per decision. In auto mode it prints the
//! same table but answers with the dealer's draw-below-17 rule instead of
//! reading input.

use blackjack_engine::player::{ChoiceSource, HouseRuleChoices, TurnChoice, TurnPrompt};
use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::formatters::format_table;
use crate::io_utils::read_stdin_line;
use crate::validation::{BetInput, MenuInput, parse_bet, parse_menu_choice};

pub struct ConsoleChoices<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    auto: bool,
    quit_requested: bool,
    io_error: Option<std::io::Error>,
}

impl<'a> ConsoleChoices<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write, auto: bool) -> Self {
        Self {
            input,
            out,
            auto,
            quit_requested: false,
            io_error: None,
        }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Set once the user typed `q` at the turn menu or input hit EOF.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Surfaces the first write failure swallowed during a decision.
    pub fn take_io_error(&mut self) -> Result<(), CliError> {
        match self.io_error.take() {
            Some(e) => Err(CliError::Io(e)),
            None => Ok(()),
        }
    }

    /// Prompts until a positive amount is entered. `None` ends the session.
    pub fn read_bet(&mut self, balance: u32) -> Result<Option<u32>, CliError> {
        loop {
            write!(self.out, "Your bet (balance {}, q to quit)? ", balance)?;
            self.out.flush()?;
            let Some(line) = read_stdin_line(self.input) else {
                writeln!(self.out)?;
                self.quit_requested = true;
                return Ok(None);
            };
            match parse_bet(&line) {
                BetInput::Amount(amount) => return Ok(Some(amount)),
                BetInput::Quit => {
                    self.quit_requested = true;
                    return Ok(None);
                }
                BetInput::Invalid(msg) => writeln!(self.out, "Error: {}", msg)?,
            }
        }
    }

    fn render(&mut self, prompt: &TurnPrompt<'_>) -> std::io::Result<()> {
        writeln!(self.out)?;
        for line in format_table(prompt.dealer, prompt.player) {
            writeln!(self.out, "{}", line)?;
        }
        if self.auto {
            return Ok(());
        }
        for choice in prompt.offered {
            let label = match choice {
                TurnChoice::Split => "Split?",
                other => other.label(),
            };
            writeln!(self.out, "{}. {}", choice.code(), label)?;
        }
        write!(self.out, "> ")?;
        self.out.flush()
    }

    fn record_io(&mut self, result: std::io::Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                if self.io_error.is_none() {
                    self.io_error = Some(e);
                }
                false
            }
        }
    }
}

impl ChoiceSource for ConsoleChoices<'_> {
    fn choose(&mut self, prompt: &TurnPrompt<'_>) -> Option<u32> {
        let rendered = self.render(prompt);
        if !self.record_io(rendered) {
            return None;
        }

        if self.auto {
            let code = HouseRuleChoices.choose(prompt);
            let label = code
                .and_then(TurnChoice::from_code)
                .map_or("Stand", TurnChoice::label);
            let written = writeln!(self.out, "auto: {}", label);
            self.record_io(written);
            return code;
        }

        let Some(line) = read_stdin_line(self.input) else {
            self.quit_requested = true;
            return None;
        };
        match parse_menu_choice(&line) {
            MenuInput::Choice(code) => Some(code),
            MenuInput::Quit => {
                self.quit_requested = true;
                None
            }
            // 0 is not a menu entry, so the engine treats it as a stand
            MenuInput::Unrecognized => Some(0),
        }
    }

    fn notice(&mut self, message: &str) {
        let written = writeln!(self.out, "{}", message);
        self.record_io(written);
    }
}
