use std::num::NonZeroU32;

use tracing::{debug, trace};

use crate::models::{FixtureDraft, TeamId, TeamRef};

use super::{calendar::ROUND_INTERVAL, MatchCalendar, ScheduleOptions};

/// League schedule built with the circle method.
///
/// Every team meets every other team `number_of_rounds` times. An odd team count gets an
/// empty slot, and whoever is paired with it sits the round out. Cycles after the first one
/// mirror it with home and away swapped. All fixtures of a round share a match day and a
/// date, with a week between rounds.
#[tracing::instrument(skip(options, teams), fields(teams = teams.len()))]
pub fn generate_league_fixtures(
    options: &ScheduleOptions,
    teams: &[TeamRef],
    number_of_rounds: NonZeroU32,
) -> Vec<FixtureDraft> {
    let mut slots: Vec<Option<&TeamId>> = teams.iter().map(|team| Some(&team.id)).collect();

    if slots.is_empty() {
        return Vec::new();
    }

    if slots.len() % 2 != 0 {
        debug!("Odd number of teams, adding a bye");
        slots.push(None);
    }

    let slot_count = slots.len();
    let cycle_length = slot_count - 1;
    let total_rounds = cycle_length * number_of_rounds.get() as usize;

    let mut calendar = MatchCalendar::starting(options.start_date);
    let mut fixtures = Vec::with_capacity(total_rounds * (slot_count / 2));

    for round in 0..total_rounds {
        let round_number = round as u32 + 1;
        let round_name = format!("Round {round_number}");
        let is_reverse = round >= cycle_length;

        for position in 0..slot_count / 2 {
            let (home, away) = if is_reverse {
                (slots[slot_count - 1 - position], slots[position])
            } else {
                (slots[position], slots[slot_count - 1 - position])
            };

            if let (Some(home), Some(away)) = (home, away) {
                fixtures.push(options.draft(
                    round_number,
                    &round_name,
                    (home, away),
                    calendar.date(),
                    round_number,
                ));
            }
        }

        trace!("Scheduled {round_name} on {}", calendar.date());

        rotate(&mut slots);
        calendar.advance(ROUND_INTERVAL);
    }

    debug!(
        "Generated {} league fixtures over {total_rounds} rounds",
        fixtures.len()
    );

    fixtures
}

/// Keeps the first slot fixed and moves the last one to the second position.
fn rotate<T>(slots: &mut Vec<T>) {
    if slots.len() < 3 {
        return;
    }

    if let Some(last) = slots.pop() {
        slots.insert(1, last);
    }
}
