/// One of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other seat.
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into a `[Player; 2]` pair.
    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A player's identity: a display name, fixed at game start. The view layer
/// also uses the name as the piece color, so "red" renders red pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { name: name.into() }
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
