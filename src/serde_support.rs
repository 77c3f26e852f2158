use crate::board::Board;
use crate::color::Color;
use crate::r#move::Move;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize Board as FEN string
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_fen())
    }
}

/// Deserialize Board from FEN string. Move history is not part of FEN and
/// starts out empty.
impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fen = String::deserialize(deserializer)?;
        Board::from_fen(&fen).map_err(serde::de::Error::custom)
    }
}

/// Serialize Move as LAN string
impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_lan())
    }
}

/// Deserialize Move from LAN string. Castling is written with king
/// coordinates, so the color passed to the parser never matters here.
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let lan = String::deserialize(deserializer)?;
        Move::from_lan(&lan, Color::White).map_err(serde::de::Error::custom)
    }
}
