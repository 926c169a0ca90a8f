use crate::Chips;

/// Parameters a round is played under.
///
/// - `ante`: paid by every solvent player whenever the pot is empty
/// - `penalty`: paid into the pot on Shin
/// - `limit`: spins allowed before the round is abandoned, `None` for no cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub ante: Chips,
    pub penalty: Chips,
    pub limit: Option<u64>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            ante: crate::ANTE,
            penalty: crate::PENALTY,
            limit: Some(crate::MAX_SPINS),
        }
    }
}

impl Rules {
    pub fn unbounded(self) -> Self {
        Self { limit: None, ..self }
    }
    pub fn bounded(self, spins: u64) -> Self {
        Self {
            limit: Some(spins),
            ..self
        }
    }
    pub fn is_exhausted(&self, spins: u64) -> bool {
        self.limit.map_or(false, |limit| spins >= limit)
    }
}
