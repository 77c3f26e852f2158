use crate::color::Color;
use std::fmt;

/// How a finished game ended. Only the terminal states the rules engine
/// detects are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    Stalemate,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWin => Some(Color::White),
            GameOutcome::BlackWin => Some(Color::Black),
            GameOutcome::Stalemate => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Stalemate)
    }

    /// PGN result token.
    pub fn result_str(&self) -> &'static str {
        match self {
            GameOutcome::WhiteWin => "1-0",
            GameOutcome::BlackWin => "0-1",
            GameOutcome::Stalemate => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameOutcome::WhiteWin => "white_win",
            GameOutcome::BlackWin => "black_win",
            GameOutcome::Stalemate => "stalemate",
        };
        write!(f, "{}", s)
    }
}
