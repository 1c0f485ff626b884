use tracing::{debug, trace};

use crate::{models::TeamRef, utils::seeding::seeded_order};

use super::{calendar::BRACKET_PASS_INTERVAL, BracketSkeleton, MatchCalendar, ScheduleOptions};

/// Winners and losers brackets over teams seeded by name.
///
/// Each pass pairs the winners bracket, sends every second-listed team down, then pairs the
/// losers bracket. Both brackets keep their first half by position. A losers pair holding the
/// same team twice is dropped like a bye. A pass over either bracket moves the calendar one
/// day, and the round number goes up once per full pass.
#[tracing::instrument(skip(options, teams), fields(teams = teams.len()))]
pub fn generate_double_elimination_fixtures(
    options: &ScheduleOptions,
    teams: &[TeamRef],
) -> BracketSkeleton {
    if teams.len() <= 1 {
        return BracketSkeleton::default();
    }

    let mut winners = seeded_order(teams);
    let mut losers: Vec<&TeamRef> = Vec::new();
    let mut calendar = MatchCalendar::starting(options.start_date);
    let mut round_number = 1;
    let mut match_day = 1;
    let mut fixtures = Vec::new();

    while winners.len() > 1 || losers.len() > 1 {
        if winners.len() > 1 {
            let round_name = format!("Winners Round {round_number}");

            for pair in winners.chunks_exact(2) {
                fixtures.push(options.draft(
                    round_number,
                    &round_name,
                    (&pair[0].id, &pair[1].id),
                    calendar.date(),
                    match_day,
                ));
                match_day += 1;
                losers.push(pair[1]);
            }

            trace!("{round_name} on {}", calendar.date());

            winners.truncate(winners.len().div_ceil(2));
            calendar.advance(BRACKET_PASS_INTERVAL);
        }

        if losers.len() > 1 {
            let round_name = format!("Losers Round {round_number}");

            for pair in losers.chunks_exact(2) {
                if pair[0].id == pair[1].id {
                    trace!("{} drawn against itself, no match", pair[0].name);
                    continue;
                }

                fixtures.push(options.draft(
                    round_number,
                    &round_name,
                    (&pair[0].id, &pair[1].id),
                    calendar.date(),
                    match_day,
                ));
                match_day += 1;
            }

            trace!("{round_name} on {}", calendar.date());

            losers.truncate(losers.len().div_ceil(2));
            calendar.advance(BRACKET_PASS_INTERVAL);
        }

        round_number += 1;
    }

    debug!("Generated {} double elimination fixtures", fixtures.len());

    BracketSkeleton::new(fixtures)
}
