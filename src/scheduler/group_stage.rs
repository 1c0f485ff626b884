use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::models::{FixtureDraft, TeamRef};

use super::{
    calendar::{GROUP_BREAK, GROUP_MATCH_INTERVAL, PLAYOFF_OFFSET},
    generate_knockout_fixtures, BracketSkeleton, MatchCalendar, ScheduleOptions,
};

/// Letter name of a group: `A` to `Z`, then `AA`, `AB` and so on.
pub fn group_name(group_index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = group_index + 1;

    while remaining > 0 {
        remaining -= 1;
        letters.push(b'A' + (remaining % 26) as u8);
        remaining /= 26;
    }

    letters.iter().rev().map(|&letter| letter as char).collect()
}

/// Deals teams into `ceil(N / teams_per_group)` groups like cards: team `i` goes to group
/// `i % group_count`.
pub fn deal_into_groups(teams: &[TeamRef], teams_per_group: NonZeroUsize) -> Vec<Vec<&TeamRef>> {
    let group_count = teams.len().div_ceil(teams_per_group.get());
    let mut groups = vec![Vec::new(); group_count];

    for (index, team) in teams.iter().enumerate() {
        groups[index % group_count].push(team);
    }

    groups
}

/// Single round robin inside every group.
///
/// Groups are played one after another. Fixtures are a day apart with an extra week between
/// groups; the round number is the group's position.
#[tracing::instrument(skip(options, teams), fields(teams = teams.len()))]
pub fn generate_group_stage_fixtures(
    options: &ScheduleOptions,
    teams: &[TeamRef],
    teams_per_group: NonZeroUsize,
) -> Vec<FixtureDraft> {
    let groups = deal_into_groups(teams, teams_per_group);
    let mut calendar = MatchCalendar::starting(options.start_date);
    let mut match_day = 1;
    let mut fixtures = Vec::new();

    for (group_index, group) in groups.iter().enumerate() {
        let round_number = group_index as u32 + 1;
        let round_name = format!("Group {}", group_name(group_index));

        trace!("{round_name} starts on {}", calendar.date());

        for (i, home) in group.iter().enumerate() {
            for away in &group[i + 1..] {
                fixtures.push(options.draft(
                    round_number,
                    &round_name,
                    (&home.id, &away.id),
                    calendar.date(),
                    match_day,
                ));
                match_day += 1;
                calendar.advance(GROUP_MATCH_INTERVAL);
            }
        }

        calendar.advance(GROUP_BREAK);
    }

    debug!(
        "Generated {} fixtures in {} groups",
        fixtures.len(),
        groups.len()
    );

    fixtures
}

/// Group stage followed by a knockout bracket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupsAndPlayoffs {
    pub group_stage: Vec<FixtureDraft>,
    pub playoffs: BracketSkeleton,
}

impl GroupsAndPlayoffs {
    /// Group fixtures first, then the bracket.
    pub fn into_fixtures(self) -> Vec<FixtureDraft> {
        let mut fixtures = self.group_stage;
        fixtures.extend(self.playoffs.into_fixtures());
        fixtures
    }
}

/// Groups plus a playoff bracket sixty days after the start date.
///
/// The bracket is a placeholder: it takes the first half of the team list as given rather
/// than the actual group qualifiers. Its match days and round numbers start again at one.
#[tracing::instrument(skip(options, teams), fields(teams = teams.len()))]
pub fn generate_groups_playoffs_fixtures(
    options: &ScheduleOptions,
    teams: &[TeamRef],
    teams_per_group: NonZeroUsize,
) -> GroupsAndPlayoffs {
    let group_stage = generate_group_stage_fixtures(options, teams, teams_per_group);

    let qualified = &teams[..teams.len().div_ceil(2)];
    let mut playoff_calendar = MatchCalendar::starting(options.start_date);
    playoff_calendar.advance(PLAYOFF_OFFSET);

    debug!(
        "Playoffs with {} teams start on {}",
        qualified.len(),
        playoff_calendar.date()
    );

    let playoffs =
        generate_knockout_fixtures(&options.starting_on(playoff_calendar.date()), qualified);

    GroupsAndPlayoffs {
        group_stage,
        playoffs,
    }
}
