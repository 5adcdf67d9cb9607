//! Group configuration and schedule queries
//!
//! A `Group` holds the derived configuration for one round-robin group
//! and answers two questions: which matches make up a given round, and
//! which opponent a given competitor faces in every round. Pairing order
//! follows the classical circle method as tabulated in the ITTF handbook
//! for match officials (round 1 of an 8-competitor group is 0-3, 1-5,
//! 2-7, 4-6).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rotation;

/// Index into the caller's original, ordered competitor list
pub type Competitor = usize;

/// Error constructing a group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("group requires at least 2 competitors, got {0}")]
    TooFewCompetitors(usize),
}

/// A single pairing within a round
///
/// Slots are positionally fixed. A `None` slot is the bye side of a null
/// match, which occurs only when the competitor count is odd.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub home: Option<Competitor>,
    pub away: Option<Competitor>,
}

impl Match {
    /// True when both slots hold a real competitor
    pub fn is_playable(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }

    /// Both competitors, when the match is playable
    pub fn pair(&self) -> Option<(Competitor, Competitor)> {
        match (self.home, self.away) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }
}

/// Immutable configuration of one round-robin group
///
/// Derived once from the competitor count. Every query is a pure
/// function of this configuration, so a single value can be queried from
/// any number of threads without coordination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group {
    /// Number of competitors
    players: usize,
    /// Table positions, always even (includes the virtual bye seat)
    seats: usize,
    /// Rounds to complete the group
    rounds: usize,
    /// Playable matches over the whole group, null matches excluded
    matches: usize,
    /// Playable matches per round, null matches excluded
    matches_per_round: usize,
}

impl Group {
    /// Create the schedule configuration for `players` competitors
    pub fn new(players: usize) -> Result<Self, GroupError> {
        if players < 2 {
            return Err(GroupError::TooFewCompetitors(players));
        }

        let seats = players + players % 2;
        let rounds = seats - 1;
        let matches = players * (players - 1) / 2;
        Ok(Self {
            players,
            seats,
            rounds,
            matches,
            matches_per_round: matches / rounds,
        })
    }

    /// Number of competitors
    pub fn players(&self) -> usize {
        self.players
    }

    /// Rounds required to complete the group
    pub fn total_rounds(&self) -> usize {
        self.rounds
    }

    /// Playable matches over the whole group, null matches excluded
    pub fn total_matches(&self) -> usize {
        self.matches
    }

    /// Playable matches in each round, null matches excluded
    pub fn matches_per_round(&self) -> usize {
        self.matches_per_round
    }

    /// Pairings for a round, in table order
    ///
    /// `round` may be any integer: values below 1 clamp to round 1 and
    /// values above `total_rounds()` wrap with period `total_rounds()`.
    /// The output includes the null match when the competitor count is
    /// odd. The first match always has competitor 0 in the home slot.
    pub fn matches_for_round(&self, round: i64) -> Vec<Match> {
        let rounds = self.rounds as i64;
        let seats = self.seats as i64;
        let players = self.players as i64;

        // clamp below, wrap above; round 0 and round 1 coincide
        let round = round.saturating_sub(1).max(0) % rounds + 1;
        let moves = rounds - round;

        let mut pairs = vec![Match::default(); self.matches_per_round + self.players % 2];

        // the anchor seat never rotates
        pairs[0].home = Some(0);
        for seat in 1..seats {
            let pos = rotation::rotated_position(seat, moves, seats);
            let slot = if pos == players {
                None // the virtual bye seat
            } else {
                Some(pos as Competitor)
            };

            let pair = &mut pairs[(seat / 2) as usize];
            if seat % 2 == 0 {
                pair.home = slot;
            } else {
                pair.away = slot;
            }
        }

        pairs
    }

    /// Opponent faced in every round by one competitor
    ///
    /// Entry `r - 1` holds the opponent met in round `r`, or `None` when
    /// that round is the competitor's bye. A `competitor` outside
    /// `0..players` yields an empty vector. Runs in O(rounds) without
    /// materializing the round-by-round table.
    pub fn opponents_of(&self, competitor: i64) -> Vec<Option<Competitor>> {
        let players = self.players as i64;
        if competitor < 0 || competitor >= players {
            return Vec::new();
        }

        let rounds = self.rounds;
        let seats = self.seats as i64;
        let mut opponents: Vec<Option<Competitor>> = vec![None; rounds];

        if competitor == 0 {
            // the anchor's partner seat walks the cycle directly
            let mut seat = 1i64;
            for slot in opponents.iter_mut().rev() {
                if seat < players {
                    *slot = Some(seat as Competitor);
                }
                seat = rotation::step_anchor_partner(seat, seats);
            }
        } else {
            let mut own_seat = competitor;
            let mut opponent_seat = rotation::partner(own_seat);
            for round in (0..rounds).rev() {
                if opponent_seat < players {
                    opponents[round] = Some(opponent_seat as Competitor);
                }

                // step our own seat back one round, then invert the
                // rotation to find who occupies the partner position there
                own_seat = rotation::step_clockwise(own_seat, seats);
                let base_partner = rotation::partner(own_seat);
                let moves = (rounds - round) as i64;
                opponent_seat = if base_partner == 0 {
                    0 // the anchor never rotates
                } else {
                    rotation::rotated_position(base_partner, moves, seats)
                };
            }
        }

        opponents
    }
}
