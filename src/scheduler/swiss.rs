use rand::{seq::SliceRandom, Rng};
use tracing::{debug, trace};

use crate::models::{FixtureDraft, TeamId, TeamRef};

use super::{calendar::ROUND_INTERVAL, MatchCalendar, ScheduleOptions};

/// Random pairings for `rounds` rounds, reusing the Swiss label.
///
/// Every round shuffles the full team list and pairs neighbours; an odd team out sits that
/// round out. Standings are not considered and rematches are possible.
#[tracing::instrument(skip(options, teams, rng), fields(teams = teams.len()))]
pub fn generate_swiss_fixtures<R: Rng + ?Sized>(
    options: &ScheduleOptions,
    teams: &[TeamRef],
    rounds: u32,
    rng: &mut R,
) -> Vec<FixtureDraft> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let team_ids: Vec<&TeamId> = teams.iter().map(|team| &team.id).collect();
    let mut calendar = MatchCalendar::starting(options.start_date);
    let mut match_day = 1;
    let mut fixtures = Vec::with_capacity(rounds as usize * (teams.len() / 2));

    for round_number in 1..=rounds {
        let round_name = format!("Round {round_number}");

        let mut drawn = team_ids.clone();
        drawn.shuffle(rng);

        for pair in drawn.chunks_exact(2) {
            fixtures.push(options.draft(
                round_number,
                &round_name,
                (pair[0], pair[1]),
                calendar.date(),
                match_day,
            ));
            match_day += 1;
        }

        trace!("Drew {round_name} for {}", calendar.date());

        calendar.advance(ROUND_INTERVAL);
    }

    debug!("Generated {} swiss fixtures", fixtures.len());

    fixtures
}
