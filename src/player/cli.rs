use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::Player;
use crate::core::{
    max_anchor, ship_name, AttackError, Coordinate, GameState, Mark, PlacementError,
    RawCoordinate, RawPlacement, ShipLayout, Winner,
};

/// Typed as the row, shows the opponent's fleet.
const REVEAL_PHRASE: &str = "I'm so proud of this community.";
/// Typed as the column, prints a joke.
const SOCIAL_PHRASE: &str = "4x Duke All-American";

/// Terminal player reading commands from `R` and writing boards to `W`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print the prompt and read one line into `self.buf`.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<&str> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            writeln!(self.output)?;
            anyhow::bail!("input closed");
        }
        Ok(self.buf.trim())
    }

    fn print_boards(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.output, "Your ships:")?;
        write!(self.output, "{}", state.human().ships)?;
        writeln!(self.output, "\n Computer:")?;
        write!(self.output, "{}", state.opponent().tracking)?;
        writeln!(self.output, "\n You:")?;
        write!(self.output, "{}", state.human().tracking)
    }
}

fn mark_word(mark: Mark) -> &'static str {
    match mark {
        Mark::Hit => "HIT",
        Mark::Miss => "miss",
        Mark::Unknown => "?",
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn show(&mut self, state: &GameState) -> anyhow::Result<()> {
        writeln!(self.output)?;
        self.print_boards(state)?;
        Ok(())
    }

    fn request_placement(
        &mut self,
        length: usize,
        layout: &ShipLayout,
    ) -> anyhow::Result<RawPlacement> {
        write!(self.output, "\n{}", layout)?;
        writeln!(
            self.output,
            "\nPlacing {} with length {}\n",
            ship_name(length),
            length
        )?;
        let max = max_anchor(length);
        let prompt = format!("Enter row, column and direction (0-{max} 0-{max} h/v): ");
        let line = self.read_line(&prompt)?;
        let mut parts = line.split_whitespace();
        let mut next = || parts.next().unwrap_or_default().to_string();
        Ok(RawPlacement {
            row: next(),
            col: next(),
            orientation: next(),
        })
    }

    fn placement_rejected(
        &mut self,
        _length: usize,
        reason: &PlacementError,
    ) -> anyhow::Result<()> {
        match reason {
            PlacementError::Malformed(e) => writeln!(self.output, "Input invalid ({e})! Try again")?,
            PlacementError::Overlap => writeln!(self.output, "Overlap detected! Try again")?,
            other => writeln!(self.output, "{other}! Try again")?,
        }
        Ok(())
    }

    fn request_attack(&mut self, state: &GameState) -> anyhow::Result<RawCoordinate> {
        loop {
            let line = self.read_line("Enter row and column to hit (0-9 0-9): ")?;
            if line == REVEAL_PHRASE {
                let ships = state.opponent().ships;
                write!(self.output, "{}", ships)?;
                continue;
            }
            if line.ends_with(SOCIAL_PHRASE) {
                writeln!(self.output, "\nAre you winning at social?")?;
                continue;
            }
            let mut parts = line.split_whitespace();
            let row = parts.next().unwrap_or_default().to_string();
            let col = parts.next().unwrap_or_default().to_string();
            return Ok(RawCoordinate { row, col });
        }
    }

    fn attack_rejected(&mut self, reason: &AttackError) -> anyhow::Result<()> {
        writeln!(self.output, "{reason}. Try again")?;
        Ok(())
    }

    fn attack_resolved(&mut self, coord: Coordinate, mark: Mark) -> anyhow::Result<()> {
        writeln!(self.output, "You fired at {} -> {}", coord, mark_word(mark))?;
        Ok(())
    }

    fn opponent_attack_resolved(&mut self, coord: Coordinate, mark: Mark) -> anyhow::Result<()> {
        writeln!(self.output, "Computer fired at {} -> {}", coord, mark_word(mark))?;
        Ok(())
    }

    fn game_ended(&mut self, state: &GameState, winner: Winner) -> anyhow::Result<()> {
        self.show(state)?;
        let banner = match winner {
            Winner::Human => "YOU WON",
            Winner::Opponent => "YOU LOST",
            Winner::Both => "DRAW - both fleets sunk",
        };
        writeln!(self.output, "\n*** {} after {} rounds ***", banner, state.rounds())?;
        self.output.flush()?;
        Ok(())
    }
}
