//! Read-eval-print loop over a session

use crate::command::display::{format_history, format_ranking, Palette};
use crate::command::parser::{Command, HELP_TEXT};
use crate::config::DisplayConfig;
use crate::error::MatbojError;
use crate::rating::RatingCalculator;
use crate::session::Matboj;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive console bound to a session and a reader/writer pair
pub struct Shell<R, W, C>
where
    C: RatingCalculator + Clone,
{
    session: Matboj<C>,
    input: R,
    output: W,
    palette: Palette,
    columns: usize,
}

impl<R: BufRead, W: Write, C: RatingCalculator + Clone> Shell<R, W, C> {
    pub fn new(session: Matboj<C>, input: R, output: W, display: &DisplayConfig) -> Self {
        Self {
            session,
            input,
            output,
            palette: Palette::new(display.color),
            columns: display.columns,
        }
    }

    /// Run until `quit` or end of input; the state is saved on the way out
    pub fn run(&mut self) -> io::Result<()> {
        self.print_ranking()?;
        writeln!(
            self.output,
            "Welcome to Matboj! Type \"help\" to show available commands."
        )?;

        loop {
            write!(self.output, "{}", self.palette.prompt())?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    writeln!(self.output)?;
                    self.quit()?;
                    return Ok(());
                }
            };

            if self.execute(Command::parse(&line))? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute a single command, writing its output
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Empty => {}
            Command::About => {
                writeln!(self.output, "Matboj leaderboard {}.", crate::VERSION)?;
            }
            Command::Quit => {
                self.quit()?;
                return Ok(Flow::Quit);
            }
            Command::Status => self.print_ranking()?,
            Command::Matches => {
                let history = format_history(&self.session.history());
                writeln!(self.output, "{}", history)?;
            }
            Command::Save => match self.session.save() {
                Ok(()) => writeln!(self.output, "Game state saved.")?,
                Err(e) => self.print_error(&e)?,
            },
            Command::Load => match self.session.load() {
                Ok(()) => {
                    writeln!(self.output, "Game state loaded.")?;
                    self.print_ranking()?;
                }
                Err(e) => self.print_error(&e)?,
            },
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::Undo(position) => self.undo(position)?,
            Command::Match { winner, loser } => {
                match self.session.record_match(&winner, &loser) {
                    Ok(_) => self.print_ranking()?,
                    Err(e) => {
                        self.print_error(&e)?;
                        if !e.is_state_unchanged() {
                            self.print_ranking()?;
                        }
                    }
                }
            }
            Command::Unknown(line) => {
                warn!("Unknown command: {}", line);
                let message = self.palette.error("Unknown command.");
                writeln!(self.output, "{}", message)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn undo(&mut self, position: usize) -> io::Result<()> {
        let target = match self.session.preview_undo(position) {
            Ok(target) => target,
            Err(e) => return self.print_error(&e),
        };

        write!(self.output, "Undo {}? [y/n] ", target)?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        if answer.trim() != "y" {
            info!("Undo of {} cancelled", target);
            return writeln!(self.output, "Undo cancelled.");
        }

        match self.session.commit_undo(position) {
            Ok(outcome) => {
                writeln!(self.output, "Undo done for {}", outcome.removed)?;
                self.print_ranking()
            }
            Err(e) => {
                self.print_error(&e)?;
                if !e.is_state_unchanged() {
                    self.print_ranking()?;
                }
                Ok(())
            }
        }
    }

    fn quit(&mut self) -> io::Result<()> {
        if let Err(e) = self.session.save() {
            self.print_error(&e)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_ranking(&mut self) -> io::Result<()> {
        let ranking = format_ranking(&self.session.ranking(), self.columns);
        writeln!(self.output, "{}\n", ranking)
    }

    fn print_error(&mut self, error: &MatbojError) -> io::Result<()> {
        warn!("Command failed: {}", error);
        let message = self.palette.error(&error.to_string());
        writeln!(self.output, "{}", message)
    }

    pub fn session(&self) -> &Matboj<C> {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
