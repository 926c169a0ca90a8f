use super::*;
use crate::Chips;
use crate::Face;
use crate::Player;
use crate::Position;
use rand::Rng;

/// True if exactly one player still has money.
pub fn check_for_winner(players: &[Player]) -> bool {
    players.iter().filter(|p| !p.is_bankrupt()).count() == 1
}

/// Plays one round under the default rules with a thread-local RNG.
pub fn play_game(players: usize, bank: Chips) -> Result<Summary, Error> {
    Round::new(Rules::default(), players, bank)?.play(&mut rand::rng())
}

/// A table of players around a shared pot.
///
/// Players spin in a fixed rotation. Whenever the pot is empty at the start
/// of someone's turn, every solvent player antes. Bankrupt players keep their
/// seat and are skipped. The round is over once exactly one player is solvent.
///
/// # Fields
///
/// - `rules`: ante, penalty and spin limit
/// - `bank`: starting bank of every player
/// - `pot`: chips in the middle
/// - `spins`: spins taken so far
/// - `players`: seats in rotation order
#[derive(Debug, Clone)]
pub struct Round {
    rules: Rules,
    bank: Chips,
    pot: Chips,
    spins: u64,
    players: Vec<Player>,
}

impl Round {
    /// Seats `players` players with `bank` each.
    ///
    /// Rejects empty tables, empty banks, and tables whose total money
    /// does not fit in [`Chips`].
    pub fn new(rules: Rules, players: usize, bank: Chips) -> Result<Self, Error> {
        if players == 0 {
            return Err(Error::NoPlayers);
        }
        if bank == 0 {
            return Err(Error::EmptyBank);
        }
        Chips::try_from(players)
            .ok()
            .and_then(|n| n.checked_mul(bank))
            .ok_or(Error::Overflow { players, bank })?;
        Ok(Self {
            rules,
            bank,
            pot: 0,
            spins: 0,
            players: (0..players).map(|i| Player::from((i, bank))).collect(),
        })
    }
}

impl Round {
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn spins(&self) -> u64 {
        self.spins
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// Money on the table, pot included.
    pub fn total(&self) -> Chips {
        self.pot + self.players.iter().map(Player::bank).sum::<Chips>()
    }
    /// Players with a nonzero bank.
    pub fn solvent(&self) -> usize {
        self.players.iter().filter(|p| !p.is_bankrupt()).count()
    }
    /// Seat of the sole solvent player, if the round is decided.
    pub fn winner(&self) -> Option<Position> {
        check_for_winner(&self.players)
            .then(|| self.players.iter().position(|p| !p.is_bankrupt()))
            .flatten()
    }
}

impl Round {
    /// Every player antes in seat order. Returns the amount collected.
    pub fn ante_up(&mut self) -> Chips {
        let ante = self.rules.ante;
        let collected = self
            .players
            .iter_mut()
            .map(|p| p.ante(ante))
            .sum::<Chips>();
        self.pot += collected;
        log::debug!("** everyone must ante! the pot is now {} **", self.pot);
        collected
    }
    /// The player at `seat` spins, unless they are bankrupt.
    pub fn step<R>(&mut self, seat: Position, rng: &mut R) -> Option<Face>
    where
        R: Rng + ?Sized,
    {
        let penalty = self.rules.penalty;
        let player = &mut self.players[seat];
        if player.is_bankrupt() {
            return None;
        }
        let (face, pot) = player.turn(self.pot, penalty, rng);
        self.pot = pot;
        self.spins += 1;
        log::trace!(
            "{} spun {} and now has a bank of {}. the pot is now {}.",
            player.name(),
            face,
            player.bank(),
            self.pot
        );
        Some(face)
    }
    /// Spins around the table until one player holds everything.
    pub fn play<R>(&mut self, rng: &mut R) -> Result<Summary, Error>
    where
        R: Rng + ?Sized,
    {
        log::debug!(
            "starting a round of {} players with a bank of {}",
            self.players.len(),
            self.bank
        );
        loop {
            for seat in 0..self.players.len() {
                if self.pot == 0 {
                    self.ante_up();
                }
                if let Some(winner) = self.winner() {
                    return Ok(self.settle(winner));
                }
                if self.solvent() == 0 {
                    log::warn!("every player went bankrupt after {} spins", self.spins);
                    return Err(Error::Insolvent);
                }
                if self.rules.is_exhausted(self.spins) {
                    log::warn!("abandoning round after {} spins", self.spins);
                    return Err(Error::Exhausted { spins: self.spins });
                }
                self.step(seat, rng);
            }
        }
    }
    fn settle(&self, seat: Position) -> Summary {
        let winner = &self.players[seat];
        log::debug!("{} after {} spins", winner, self.spins);
        Summary {
            players: self.players.len(),
            bank: self.bank,
            spins: self.spins,
            winner: winner.name().to_string(),
            seat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn table(banks: &[Chips]) -> Vec<Player> {
        banks
            .iter()
            .enumerate()
            .map(|(i, &b)| Player::from((i, b)))
            .collect()
    }

    #[test]
    fn winner_needs_exactly_one_solvent() {
        assert!(check_for_winner(&table(&[0, 7, 0])));
        assert!(check_for_winner(&table(&[4])));
        assert!(!check_for_winner(&table(&[0, 0, 0])));
        assert!(!check_for_winner(&table(&[1, 7, 0])));
        assert!(!check_for_winner(&[]));
    }

    #[test]
    fn rejects_bad_tables() {
        let rules = Rules::default();
        assert_eq!(Round::new(rules, 0, 10).unwrap_err(), Error::NoPlayers);
        assert_eq!(Round::new(rules, 4, 0).unwrap_err(), Error::EmptyBank);
        assert_eq!(
            Round::new(rules, 2, Chips::MAX).unwrap_err(),
            Error::Overflow {
                players: 2,
                bank: Chips::MAX
            }
        );
    }

    #[test]
    fn seats_named_in_order() {
        let round = Round::new(Rules::default(), 3, 10).unwrap();
        let names = round.players().iter().map(Player::name).collect::<Vec<_>>();
        assert_eq!(names, ["Player 1", "Player 2", "Player 3"]);
        assert_eq!(round.total(), 30);
        assert_eq!(round.pot(), 0);
        assert_eq!(round.winner(), None);
    }

    #[test]
    fn ante_collects_from_solvent() {
        let mut round = Round::new(Rules::default(), 4, 10).unwrap();
        assert_eq!(round.ante_up(), 4);
        assert_eq!(round.pot(), 4);
        assert!(round.players().iter().all(|p| p.bank() == 9));
    }

    #[test]
    fn conserves_money_every_transition() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut round = Round::new(Rules::default(), 6, 20).unwrap();
        let total = round.total();
        'play: for _ in 0..10_000 {
            for seat in 0..6 {
                if round.pot() == 0 {
                    round.ante_up();
                    assert_eq!(round.total(), total);
                }
                if round.winner().is_some() {
                    break 'play;
                }
                round.step(seat, rng);
                assert_eq!(round.total(), total);
            }
        }
    }

    #[test]
    fn bankrupt_players_are_skipped() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut round = Round::new(Rules::default(), 2, 1).unwrap();
        round.ante_up();
        assert_eq!(round.step(0, rng), None);
        assert_eq!(round.step(1, rng), None);
        assert_eq!(round.spins(), 0);
    }

    #[test]
    fn heads_up_winner_takes_everything() {
        for seed in 0..32 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let mut round = Round::new(Rules::default(), 2, 10).unwrap();
            let summary = round.play(rng).unwrap();
            let winner = &round.players()[summary.seat];
            let loser = &round.players()[1 - summary.seat];
            assert_eq!(winner.bank() + round.pot(), 20);
            assert_eq!(loser.bank(), 0);
            assert_eq!(summary.winner, winner.name());
            assert_eq!(summary.spins, round.spins());
            assert_eq!(summary.players, 2);
            assert_eq!(summary.bank, 10);
        }
    }

    #[test]
    fn lone_player_wins_without_spinning() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let summary = Round::new(Rules::default(), 1, 10)
            .unwrap()
            .play(rng)
            .unwrap();
        assert_eq!(summary.spins, 0);
        assert_eq!(summary.winner, "Player 1");
    }

    #[test]
    fn empty_pot_reantes_mid_pass() {
        let ref mut rng = crate::Script::from([Face::Gimel]);
        let mut round = Round::new(Rules::default(), 3, 2).unwrap();
        let summary = round.play(rng).unwrap();
        assert_eq!(summary.spins, 1);
        assert_eq!(summary.winner, "Player 1");
        assert_eq!(round.pot(), 2);
        let banks = round.players().iter().map(Player::bank).collect::<Vec<_>>();
        assert_eq!(banks, [3, 0, 0]);
    }

    #[test]
    fn ante_can_bankrupt_everyone() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut round = Round::new(Rules::default(), 2, 1).unwrap();
        assert_eq!(round.play(rng), Err(Error::Insolvent));
        assert_eq!(round.total(), 2);
    }

    #[test]
    fn spin_limit_aborts() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut round = Round::new(Rules::default().bounded(1), 20, 50).unwrap();
        assert_eq!(round.play(rng), Err(Error::Exhausted { spins: 1 }));
        let mut round = Round::new(Rules::default().bounded(0), 4, 10).unwrap();
        assert_eq!(round.play(rng), Err(Error::Exhausted { spins: 0 }));
    }

    #[test]
    fn default_game_finishes() {
        let summary = play_game(4, 10).unwrap();
        assert_eq!(summary.players, 4);
        assert_eq!(summary.bank, 10);
        assert!(summary.spins > 0);
    }
}
