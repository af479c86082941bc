//! Fixture generation: double round-robin for four teams (Turno + Returno).

use crate::models::{Match, Stage, Team};
use std::collections::BTreeMap;

/// Rounds in one leg.
pub const ROUNDS_PER_LEG: u32 = 3;

/// Index pairings per round. Each round is a perfect matching of the four teams,
/// and the three rounds together cover all six pairs.
const PAIRING_ROUNDS: [[(usize, usize); 2]; 3] = [
    [(0, 1), (2, 3)],
    [(0, 2), (1, 3)],
    [(0, 3), (1, 2)],
];

/// Generate the 12 group matches for exactly four teams.
///
/// 1. First leg: rounds 1-3, lower index at home.
/// 2. Second leg: same pairings in the same order, home/away swapped, rounds 4-6.
///
/// All matches start unscored. Team order decides the pairings.
pub fn generate_schedule(teams: &[Team; 4]) -> Vec<Match> {
    let mut schedule = Vec::with_capacity(12);

    for (r, pairings) in (1..).zip(PAIRING_ROUNDS.iter()) {
        for (slot, &(h, a)) in pairings.iter().enumerate() {
            schedule.push(Match::new(
                format!("t1-r{}-p{}", r, slot),
                teams[h].id,
                teams[a].id,
                r,
                Stage::FirstLeg,
            ));
        }
    }

    for (r, pairings) in (1..).zip(PAIRING_ROUNDS.iter()) {
        let round = r + ROUNDS_PER_LEG;
        for (slot, &(h, a)) in pairings.iter().enumerate() {
            schedule.push(Match::new(
                format!("t2-r{}-p{}", round, slot),
                teams[a].id,
                teams[h].id,
                round,
                Stage::SecondLeg,
            ));
        }
    }

    log::info!("Generated schedule with {} matches", schedule.len());
    schedule
}

/// Group matches by round number, rounds ascending, schedule order kept within a round.
pub fn matches_by_round(matches: &[Match]) -> BTreeMap<u32, Vec<&Match>> {
    let mut rounds: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        rounds.entry(m.round).or_default().push(m);
    }
    rounds
}
