use super::*;
use crate::Chips;
use crate::Position;
use colored::*;
use rand::Rng;

/// A participant's bank and identity.
///
/// Banks never go negative: every payment is clamped to what the player
/// holds, and a player who runs out stays at the table with an empty bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    bank: Chips,
    color: Color,
}

impl From<(Position, Chips)> for Player {
    fn from((seat, bank): (Position, Chips)) -> Self {
        Self::new(format!("Player {}", seat + 1), bank, paint(seat))
    }
}

impl Player {
    pub fn new(name: String, bank: Chips, color: Color) -> Self {
        Self { name, bank, color }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn bank(&self) -> Chips {
        self.bank
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn is_bankrupt(&self) -> bool {
        self.bank == 0
    }
    /// Pays up to `amount` out of the bank and returns what was actually paid.
    fn pay(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.bank);
        self.bank -= paid;
        paid
    }
    fn take(&mut self, amount: Chips) {
        self.bank += amount;
    }
}

impl Player {
    /// Puts the ante in, or whatever is left if the bank can't cover it.
    pub fn ante(&mut self, amount: Chips) -> Chips {
        self.pay(amount)
    }
    /// Spins and settles against the pot. Returns the face and the new pot.
    pub fn turn<R>(&mut self, pot: Chips, penalty: Chips, rng: &mut R) -> (Face, Chips)
    where
        R: Rng + ?Sized,
    {
        let face = rng.random::<Face>();
        (face, self.resolve(face, pot, penalty))
    }
    /// Settles a known face against the pot and returns the new pot.
    pub fn resolve(&mut self, face: Face, pot: Chips, penalty: Chips) -> Chips {
        match face {
            Face::Nun => pot,
            Face::Gimel => {
                self.take(pot);
                0
            }
            Face::Hey => {
                let half = pot.div_ceil(2);
                self.take(half);
                pot - half
            }
            Face::Shin => pot + self.pay(penalty),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = if self.is_bankrupt() {
            format!("{} is bankrupt.", self.name)
        } else {
            format!("{} has a bank of {}.", self.name, self.bank)
        };
        write!(f, "{}", text.color(self.color))
    }
}
