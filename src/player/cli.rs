use std::io::{self, BufRead, BufReader, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    ai,
    common::{CellState, ShotResult},
    config::FIELD_SIZE,
    coord::Coord,
    field::Field,
    render::render_field_pair,
    session::Outcome,
};

use super::Player;

/// Interactive player reading moves from a line-oriented input.
pub struct CliPlayer {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

impl CliPlayer {
    /// Player on the process console.
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }

    /// Player on arbitrary streams (used by tests and scripted games).
    pub fn with_io<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate console input for a shot: exactly a column letter then a row digit.
/// Lowercase letters and surrounding whitespace are accepted.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim().to_ascii_uppercase();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.chars().count() != 2 {
        return Err("Need exactly a column letter and a row digit (e.g., B5)".to_string());
    }
    let last_col = (b'A' + FIELD_SIZE as u8 - 1) as char;
    Coord::parse(&input).ok_or_else(|| {
        format!(
            "'{}' is off the field - columns A-{}, rows 1-{}",
            input, last_col, FIELD_SIZE
        )
    })
}

fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "missed",
        ShotResult::Hit => "hit a ship",
        ShotResult::Kill => "sank a ship",
    }
}

impl Player for CliPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, view: &Field) -> anyhow::Result<Coord> {
        let suggestion = ai::suggest_target(view, rng);
        loop {
            match suggestion {
                Some(s) => write!(self.output, "Your move! Enter coordinates to shoot [{}]: ", s)?,
                None => write!(self.output, "Your move! Enter coordinates to shoot: ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("Input closed"));
            }
            let target = if line.trim().is_empty() {
                match suggestion {
                    Some(s) => s,
                    None => continue,
                }
            } else {
                match parse_coord(&line) {
                    Ok(c) => c,
                    Err(e) => {
                        self.say(&format!("Invalid coordinate: {}", e));
                        continue;
                    }
                }
            };
            if view.get(target) != CellState::Unknown {
                self.say(&format!("{} is already known, pick another cell", target));
                continue;
            }
            return Ok(target);
        }
    }

    fn show_fields(&mut self, own: &Field, opponent: &Field) {
        let board = render_field_pair(own, opponent);
        let _ = write!(self.output, "\n{}", board);
    }

    fn await_opponent(&mut self) {
        self.say("Waiting for the opponent's move...");
    }

    fn handle_shot_result(&mut self, target: Coord, result: ShotResult) {
        self.say(&format!("You {} at {}", describe(result), target));
    }

    fn handle_opponent_shot(&mut self, target: Coord, result: ShotResult) {
        self.say(&format!("Opponent {} at {}", describe(result), target));
    }

    fn handle_game_over(&mut self, outcome: Outcome, own: &Field, opponent: &Field) {
        self.show_fields(own, opponent);
        match outcome {
            Outcome::Won => self.say("Game over! You won!"),
            Outcome::Lost => self.say("Game over! You lost."),
        }
    }
}
