#![cfg(feature = "std")]

//! Interactive session driver.
//!
//! The loop owns the leaderboard and the current round and talks to the
//! player through any `BufRead`/`Write` pair, which keeps it scriptable.

use std::io::{self, BufRead, Write};
use std::string::String;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use rand::Rng;

use crate::{
    cli::{invalid_input_message, outcome_message, parse_coord, render_board},
    game::GameSession,
    generator::BoardGenerator,
    leaderboard::Leaderboard,
};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Display pacing for the console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Pause after each shot message and after the welcome banner.
    pub pause: Duration,
    /// Emit an ANSI clear-screen sequence between turns.
    pub clear_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            pause: Duration::from_millis(1500),
            clear_screen: true,
        }
    }
}

impl SessionOptions {
    /// No pauses and no screen clearing.
    pub fn instant() -> Self {
        Self {
            pause: Duration::ZERO,
            clear_screen: false,
        }
    }
}

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingName,
    InRound,
    RoundComplete,
    AwaitingReplay,
    SessionEnded,
}

/// Runs rounds until the player declines to play again.
pub struct GameLoop<I, O, R> {
    input: I,
    output: O,
    rng: R,
    generator: BoardGenerator,
    options: SessionOptions,
    phase: Phase,
    player: String,
    round: Option<GameSession>,
    leaderboard: Leaderboard,
}

impl<I: BufRead, O: Write, R: Rng> GameLoop<I, O, R> {
    pub fn new(input: I, output: O, rng: R, generator: BoardGenerator, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            rng,
            generator,
            options,
            phase: Phase::AwaitingName,
            player: String::new(),
            round: None,
            leaderboard: Leaderboard::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Drive the session to `SessionEnded`.
    ///
    /// End of input at any prompt ends the session; a round in progress is
    /// dropped without being recorded.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.phase = match self.phase {
                Phase::AwaitingName => self.greet()?,
                Phase::InRound => self.play_round()?,
                Phase::RoundComplete => self.finish_round()?,
                Phase::AwaitingReplay => self.ask_replay()?,
                Phase::SessionEnded => {
                    self.show_leaderboard()?;
                    return Ok(());
                }
            };
        }
    }

    fn greet(&mut self) -> anyhow::Result<Phase> {
        self.clear()?;
        writeln!(self.output, "Welcome to Battleship!\n")?;
        self.pause()?;
        match self.prompt("Enter your name: ")? {
            Some(name) => {
                log::info!("session started for {:?}", name);
                self.player = name;
                Ok(Phase::InRound)
            }
            None => Ok(Phase::SessionEnded),
        }
    }

    fn play_round(&mut self) -> anyhow::Result<Phase> {
        let (truth, visible) = self
            .generator
            .generate(&mut self.rng)
            .context("failed to lay out the fleet")?;
        let mut session = GameSession::new(self.player.clone(), truth, visible)?;
        let size = session.visible().size();

        self.clear()?;
        writeln!(self.output, "Player: {}\n", self.player)?;
        while !session.is_complete() {
            write!(self.output, "{}", render_board(session.visible().grid()))?;
            let (row, col) = match self.read_shot(size)? {
                Some(coord) => coord,
                None => {
                    log::info!("input closed after {} shots; round abandoned", session.shots());
                    return Ok(Phase::SessionEnded);
                }
            };
            let outcome = session.fire(row, col)?;
            for line in outcome_message(outcome) {
                writeln!(self.output, "{}", line)?;
            }
            self.pause()?;
            self.clear()?;
        }
        self.round = Some(session);
        Ok(Phase::RoundComplete)
    }

    fn finish_round(&mut self) -> anyhow::Result<Phase> {
        let Some(session) = self.round.take() else {
            return Err(anyhow::anyhow!("round completed without a session"));
        };
        write!(self.output, "{}", render_board(session.visible().grid()))?;
        writeln!(
            self.output,
            "Congratulations, {}! You sunk all the ships in {} shots.",
            session.player(),
            session.shots()
        )?;
        self.leaderboard.record(session.player(), session.shots());
        Ok(Phase::AwaitingReplay)
    }

    fn ask_replay(&mut self) -> anyhow::Result<Phase> {
        match self.prompt("Do you want to play again? (yes/no): ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => Ok(Phase::InRound),
            _ => Ok(Phase::SessionEnded),
        }
    }

    fn show_leaderboard(&mut self) -> anyhow::Result<()> {
        self.clear()?;
        writeln!(self.output, "Game Over. Leaderboard:")?;
        for line in self.leaderboard.render() {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Prompt until a well-formed coordinate arrives. `None` on end of input.
    fn read_shot(&mut self, size: usize) -> io::Result<Option<(usize, usize)>> {
        loop {
            let Some(line) = self.prompt("Enter your shot (e.g., A5): ")? else {
                return Ok(None);
            };
            match parse_coord(&line, size) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => {
                    log::debug!("rejected shot input {:?}: {}", line, e);
                    writeln!(self.output, "{}", invalid_input_message(size))?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }

    fn pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        if !self.options.pause.is_zero() {
            thread::sleep(self.options.pause);
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.options.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn round_complete_without_session_is_an_error() {
        let mut game = GameLoop::new(
            Cursor::new(Vec::new()),
            Vec::new(),
            SmallRng::seed_from_u64(1),
            BoardGenerator::new(GameConfig::default()).unwrap(),
            SessionOptions::instant(),
        );
        game.phase = Phase::RoundComplete;
        assert!(game.run().is_err());
        assert!(game.leaderboard().is_empty());
    }
}
