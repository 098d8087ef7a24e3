/// A player identity, numbered from 1 up to the configured player count.
///
/// The player count is configuration, not a fixed pair, so identity is a
/// 1-based integer rather than an enumeration of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1, who always moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Construct a player identity if `id` is within `1..=player_count`.
    pub fn new(id: u8, player_count: u8) -> Option<PlayerId> {
        if id >= 1 && id <= player_count {
            Some(PlayerId(id))
        } else {
            None
        }
    }

    /// The next player in turn order, wrapping back to player 1.
    pub fn next(self, player_count: u8) -> PlayerId {
        if self.0 >= player_count {
            PlayerId(1)
        } else {
            PlayerId(self.0 + 1)
        }
    }

    /// The 1-based numeric identity.
    pub fn id(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
