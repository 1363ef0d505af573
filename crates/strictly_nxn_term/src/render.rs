//! Terminal rendering of the board, prompts and results.
//!
//! Everything is written to a caller-supplied [`Write`] so the layout can
//! be checked without a terminal. Styling is skipped entirely when color
//! is off, leaving plain text.

use crossterm::style::{Color, StyledContent, Stylize};
use crossterm::{cursor, queue, terminal};
use std::fmt::Display;
use std::io::Write;
use strictly_nxn::{Game, Outcome, Player};
use tracing::instrument;

/// Player colors, assigned by seat and repeating after six players.
const PLAYER_COLORS: [Color; 6] = [
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
];

/// Color used for a seat.
pub fn player_color(seat: usize) -> Color {
    PLAYER_COLORS[seat % PLAYER_COLORS.len()]
}

/// Rendering settings for one terminal.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    color: bool,
    clear: bool,
}

impl Screen {
    /// Creates a screen. `clear` redraws from the top-left on every turn.
    pub fn new(color: bool, clear: bool) -> Self {
        Self { color, clear }
    }

    fn bold(&self, text: impl Display) -> String {
        self.styled(text, |s| s.bold())
    }

    fn italic(&self, text: impl Display) -> String {
        self.styled(text, |s| s.italic())
    }

    fn colored(&self, text: impl Display, color: Color) -> String {
        self.styled(text, |s| s.with(color))
    }

    fn styled(
        &self,
        text: impl Display,
        style: impl FnOnce(StyledContent<String>) -> StyledContent<String>,
    ) -> String {
        let text = text.to_string();
        if self.color {
            style(text.stylize()).to_string()
        } else {
            text
        }
    }

    /// Player name in the player's color.
    fn player_name(&self, player: &Player) -> String {
        self.colored(player.name(), player_color(*player.seat()))
    }

    /// Draws the grid with its `COLUMN`/`ROW` labels and 1-based numbers.
    #[instrument(skip_all)]
    pub fn draw_board(&self, out: &mut impl Write, game: &Game) -> std::io::Result<()> {
        let size = game.board().size();
        let number_width = size.to_string().len();
        let indent = " ".repeat(number_width + 4);
        let column_label = format!("{:^width$}", "COLUMN", width = 3 * size);
        let row_label: Vec<char> = format!("{:^width$}", "ROW", width = size).chars().collect();

        writeln!(out, "{}{}", indent, self.italic(column_label))?;

        write!(out, "{}", indent)?;
        for col in 1..=size {
            write!(out, "{}", self.bold(format!("{:^3}", col)))?;
        }
        writeln!(out)?;

        for (row, cells) in game.board().rows().enumerate() {
            write!(
                out,
                " {} {} ",
                self.italic(row_label[row]),
                self.bold(format!("{:>width$}", row + 1, width = number_width))
            )?;
            for cell in cells {
                match cell {
                    Some(symbol) => {
                        let seat = game.roster().by_symbol(*symbol).map_or(0, |p| *p.seat());
                        write!(out, "[{}]", self.colored(symbol, player_color(seat)))?;
                    }
                    None => write!(out, "[ ]")?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Draws one turn: board, input hint, any pending notice and the prompt.
    #[instrument(skip_all)]
    pub fn draw_turn(
        &self,
        out: &mut impl Write,
        game: &Game,
        notice: Option<&str>,
    ) -> std::io::Result<()> {
        self.refresh(out)?;
        self.draw_board(out, game)?;
        writeln!(out, "Type: <{}>,<{}>", self.italic("row"), self.italic("column"))?;
        writeln!(out)?;
        if let Some(notice) = notice {
            writeln!(out, "{}", self.colored(notice, Color::DarkYellow))?;
        }
        write!(out, " {}: ", self.player_name(game.current_player()))?;
        out.flush()
    }

    /// Draws the final board and the `Game Over.` line.
    #[instrument(skip_all)]
    pub fn draw_result(&self, out: &mut impl Write, game: &Game) -> std::io::Result<()> {
        self.refresh(out)?;
        self.draw_board(out, game)?;
        writeln!(out)?;
        match game.result() {
            Some(Outcome::Win { player, .. }) => {
                writeln!(out, "Game Over. {} wins!", self.player_name(player))?
            }
            Some(Outcome::Abandoned) => {
                writeln!(out, "Game Over. {}", self.italic("Forced to quit."))?
            }
            Some(outcome) => writeln!(out, "Game Over. {}", outcome)?,
            None => {}
        }
        out.flush()
    }

    fn refresh(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.clear {
            queue!(
                out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        Ok(())
    }
}
