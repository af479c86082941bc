//! Team, TeamId and the four team colors.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// Shirt color of a team. Each of the four teams picks a different one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TeamColor {
    Azul,
    Preto,
    Branco,
    Amarelo,
}

impl TeamColor {
    /// All colors, in the order they are offered at setup.
    pub const ALL: [TeamColor; 4] = [
        TeamColor::Azul,
        TeamColor::Preto,
        TeamColor::Branco,
        TeamColor::Amarelo,
    ];
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TeamColor::Azul => "Azul",
            TeamColor::Preto => "Preto",
            TeamColor::Branco => "Branco",
            TeamColor::Amarelo => "Amarelo",
        };
        f.write_str(s)
    }
}

/// A registered team. Never changed by the core once created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub color: TeamColor,
}

impl Team {
    /// Create a new team with a fresh id.
    pub fn new(name: impl Into<String>, color: TeamColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
        }
    }
}
