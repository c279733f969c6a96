//! ID types for balldontlie players.

use crate::error::{HoopsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for balldontlie player IDs.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::PlayerId;
///
/// let player_id: PlayerId = "237".parse().unwrap();
/// assert_eq!(player_id.as_u64(), 237);
/// assert_eq!(player_id.to_string(), "237");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_from_str() {
        let id: PlayerId = "237".parse().unwrap();
        assert_eq!(id, PlayerId::new(237));
    }

    #[test]
    fn test_player_id_from_str_invalid() {
        let result = "LeBron".parse::<PlayerId>();
        assert!(matches!(result, Err(HoopsError::InvalidPlayerId(_))));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(14).to_string(), "14");
    }
}
