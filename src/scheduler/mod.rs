//! Fixture generation for every supported competition format.
//!
//! Each generator is a pure function of its inputs. Nothing here tracks results: bracket
//! formats advance teams by position and return a [`BracketSkeleton`] to make that explicit.

mod calendar;
mod double_elimination;
mod group_stage;
mod knockout;
mod round_robin;
mod swiss;

use std::{
    collections::BTreeSet,
    num::{NonZeroU32, NonZeroUsize},
};

use rand::Rng;
use time::Date;
use tracing::debug;

use crate::models::{
    CompetitionFormat, FixtureDraft, FixtureStatus, FormatType, TeamId, TeamRef, VenueRotation,
};

pub use calendar::MatchCalendar;
pub use double_elimination::generate_double_elimination_fixtures;
pub use group_stage::{
    deal_into_groups, generate_group_stage_fixtures, generate_groups_playoffs_fixtures,
    group_name, GroupsAndPlayoffs,
};
pub use knockout::{generate_knockout_fixtures, knockout_round_name};
pub use round_robin::generate_league_fixtures;
pub use swiss::generate_swiss_fixtures;

pub const DEFAULT_LEAGUE_ROUNDS: NonZeroU32 = NonZeroU32::MIN;
pub const DEFAULT_SWISS_ROUNDS: u32 = 4;

pub fn default_teams_per_group() -> NonZeroUsize {
    NonZeroUsize::new(4).expect("Hard-coded group size should be non-zero")
}

/// Scheduling parameters shared by every format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleOptions {
    /// Copied verbatim into every fixture.
    pub competition_id: String,
    pub start_date: Date,
    /// Copied verbatim into every fixture, usually `HH:MM`.
    pub default_time: String,
    pub venue_rotation: VenueRotation,
    pub single_venue: Option<String>,
}

impl ScheduleOptions {
    pub fn new(competition_id: impl Into<String>, start_date: Date) -> ScheduleOptions {
        ScheduleOptions {
            competition_id: competition_id.into(),
            start_date,
            default_time: "15:00".to_owned(),
            venue_rotation: VenueRotation::default(),
            single_venue: None,
        }
    }

    pub fn starting_on(&self, start_date: Date) -> ScheduleOptions {
        ScheduleOptions {
            start_date,
            ..self.clone()
        }
    }

    fn venue(&self) -> String {
        match (&self.venue_rotation, &self.single_venue) {
            (VenueRotation::SingleVenue, Some(venue)) => venue.clone(),
            _ => String::new(),
        }
    }

    fn draft(
        &self,
        round_number: u32,
        round_name: &str,
        (home, away): (&TeamId, &TeamId),
        scheduled_date: Date,
        match_day: u32,
    ) -> FixtureDraft {
        FixtureDraft {
            competition_id: self.competition_id.clone(),
            round_number,
            round_name: round_name.to_owned(),
            home_team_id: home.clone(),
            away_team_id: away.clone(),
            venue: self.venue(),
            scheduled_date,
            scheduled_time: self.default_time.clone(),
            match_day,
            notes: String::new(),
            status: FixtureStatus::Scheduled,
            assigned_officials: vec![],
        }
    }
}

/// Fixtures of a bracket generated before any result is known.
///
/// From the second round on, the pairings assume that the first half of the previous round's
/// team list advanced, by position. Once real results exist the bracket has to be generated
/// again with the actual winners.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BracketSkeleton {
    fixtures: Vec<FixtureDraft>,
}

impl BracketSkeleton {
    fn new(fixtures: Vec<FixtureDraft>) -> BracketSkeleton {
        BracketSkeleton { fixtures }
    }

    pub fn fixtures(&self) -> &[FixtureDraft] {
        &self.fixtures
    }

    pub fn into_fixtures(self) -> Vec<FixtureDraft> {
        self.fixtures
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn round_count(&self) -> usize {
        self.fixtures
            .iter()
            .map(|fixture| fixture.round_number)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn round(&self, round_number: u32) -> Vec<&FixtureDraft> {
        self.fixtures
            .iter()
            .filter(|fixture| fixture.round_number == round_number)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureGenerationRequest {
    pub options: ScheduleOptions,
    pub teams: Vec<TeamRef>,
    pub competition_format: CompetitionFormat,
}

/// Generates the fixtures of a competition according to its format.
///
/// Missing sub-configurations fall back to one league round, groups of four and four Swiss
/// rounds. `rng` is only consumed by the Swiss format. Custom formats produce nothing; their
/// fixtures are entered by hand.
#[tracing::instrument(
    skip_all,
    fields(format = %request.competition_format.format_type, teams = request.teams.len())
)]
pub fn generate_fixtures_from_format<R: Rng + ?Sized>(
    request: &FixtureGenerationRequest,
    rng: &mut R,
) -> Vec<FixtureDraft> {
    let format = &request.competition_format;
    let options = &request.options;
    let teams = &request.teams;

    let league_rounds = format
        .league_config
        .as_ref()
        .map(|config| config.number_of_rounds);
    let teams_per_group = format
        .group_stage_config
        .as_ref()
        .map(|config| config.teams_per_group)
        .unwrap_or_else(default_teams_per_group);

    let fixtures = match format.format_type {
        FormatType::League | FormatType::RoundRobin => generate_league_fixtures(
            options,
            teams,
            league_rounds.unwrap_or(DEFAULT_LEAGUE_ROUNDS),
        ),
        FormatType::StraightKnockout => generate_knockout_fixtures(options, teams).into_fixtures(),
        FormatType::GroupsKnockout => {
            generate_group_stage_fixtures(options, teams, teams_per_group)
        }
        FormatType::GroupsPlayoffs => {
            generate_groups_playoffs_fixtures(options, teams, teams_per_group).into_fixtures()
        }
        FormatType::DoubleElimination => {
            generate_double_elimination_fixtures(options, teams).into_fixtures()
        }
        FormatType::Swiss => generate_swiss_fixtures(
            options,
            teams,
            league_rounds.map_or(DEFAULT_SWISS_ROUNDS, NonZeroU32::get),
            rng,
        ),
        FormatType::Custom => Vec::new(),
    };

    debug!("Generated {} fixtures", fixtures.len());

    fixtures
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use time::{macros::date, Date};

    use crate::models::{FixtureDraft, TeamId, TeamRef};

    use super::ScheduleOptions;

    pub const START: Date = date!(2024 - 08 - 17);

    pub fn options() -> ScheduleOptions {
        ScheduleOptions::new("season-2024", START)
    }

    /// Teams `t1..=tN`; names are chosen so that seeding order equals id order.
    pub fn teams(count: usize) -> Vec<TeamRef> {
        (1..=count)
            .map(|i| TeamRef::new(format!("t{i}"), format!("Team {i:03}")))
            .collect()
    }

    pub fn pairs(fixtures: &[FixtureDraft]) -> Vec<(&str, &str)> {
        fixtures
            .iter()
            .map(|f| (f.home_team_id.as_ref(), f.away_team_id.as_ref()))
            .collect()
    }

    /// How often each unordered pair of teams meets.
    pub fn meetings(fixtures: &[FixtureDraft]) -> HashMap<(TeamId, TeamId), usize> {
        let mut map = HashMap::new();

        for fixture in fixtures {
            let key = if fixture.home_team_id < fixture.away_team_id {
                (fixture.home_team_id.clone(), fixture.away_team_id.clone())
            } else {
                (fixture.away_team_id.clone(), fixture.home_team_id.clone())
            };
            *map.entry(key).or_insert(0) += 1;
        }

        map
    }
}
