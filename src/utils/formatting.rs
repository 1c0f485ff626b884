use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
};

use time::macros::format_description;
use time::{format_description, Date};

use crate::models::{ColorClashWarning, FixtureDraft, TeamId, TeamRef};

const ISO_DATE_FORMAT: &[format_description::FormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT)
        .expect("Hard-coded format should be correct")
}

/// Human readable listing of a schedule, one heading per round.
///
/// Team ids without a matching team are printed as-is.
pub struct ScheduleTable<'a> {
    fixtures: &'a [FixtureDraft],
    team_names: HashMap<&'a TeamId, &'a str>,
}

impl<'a> ScheduleTable<'a> {
    pub fn new(fixtures: &'a [FixtureDraft], teams: &'a [TeamRef]) -> ScheduleTable<'a> {
        let team_names = teams
            .iter()
            .map(|team| (&team.id, team.name.as_str()))
            .collect();

        ScheduleTable {
            fixtures,
            team_names,
        }
    }

    fn team_name(&self, id: &'a TeamId) -> &'a str {
        self.team_names.get(id).copied().unwrap_or(id.as_ref())
    }
}

impl Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.fixtures.is_empty() {
            return writeln!(f, "No fixtures generated.");
        }

        let mut current_round = None;

        for fixture in self.fixtures {
            let round = (fixture.round_number, fixture.round_name.as_str());
            if current_round != Some(round) {
                if current_round.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "{}", fixture.round_name)?;
                current_round = Some(round);
            }

            write!(
                f,
                "  #{:<3} {} {}  {} vs {}",
                fixture.match_day,
                format_iso_date(fixture.scheduled_date),
                fixture.scheduled_time,
                self.team_name(&fixture.home_team_id),
                self.team_name(&fixture.away_team_id),
            )?;

            if !fixture.venue.is_empty() {
                write!(f, " @ {}", fixture.venue)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

pub fn format_clash_warnings(warnings: &[ColorClashWarning]) -> String {
    if warnings.is_empty() {
        return "No jersey color clashes.".to_owned();
    }

    warnings
        .iter()
        .map(|warning| format!("- {}", warning.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::models::{ColorClashWarning, FixtureDraft, FixtureStatus, TeamId, TeamRef};

    use super::{format_clash_warnings, format_iso_date, ScheduleTable};

    fn fixture(round_number: u32, home: &str, away: &str, match_day: u32) -> FixtureDraft {
        FixtureDraft {
            competition_id: "cup".to_owned(),
            round_number,
            round_name: format!("Round {round_number}"),
            home_team_id: TeamId::from(home),
            away_team_id: TeamId::from(away),
            venue: String::new(),
            scheduled_date: date!(2024 - 01 - 06),
            scheduled_time: "18:30".to_owned(),
            match_day,
            notes: String::new(),
            status: FixtureStatus::Scheduled,
            assigned_officials: vec![],
        }
    }

    #[test]
    fn iso_dates_are_zero_padded() {
        assert_eq!(format_iso_date(date!(2024 - 02 - 09)), "2024-02-09");
    }

    #[test]
    fn empty_schedule() {
        assert_eq!(
            ScheduleTable::new(&[], &[]).to_string(),
            "No fixtures generated.\n"
        );
    }

    #[test]
    fn rounds_get_headings_and_names_are_resolved() {
        let teams = vec![TeamRef::new("ajx", "Ajax"), TeamRef::new("psv", "PSV")];
        let mut second = fixture(2, "psv", "fey", 2);
        second.venue = "De Kuip".to_owned();
        let fixtures = vec![fixture(1, "ajx", "psv", 1), second];

        let table = ScheduleTable::new(&fixtures, &teams).to_string();

        assert_eq!(
            table,
            "Round 1\n  #1   2024-01-06 18:30  Ajax vs PSV\n\nRound 2\n  #2   2024-01-06 18:30  PSV vs fey @ De Kuip\n"
        );
    }

    #[test]
    fn clash_warning_list() {
        assert_eq!(format_clash_warnings(&[]), "No jersey color clashes.");

        let warning = |message: &str| ColorClashWarning {
            party_a: "Home Team".to_owned(),
            party_b: "Officials".to_owned(),
            color: "#000000".to_owned(),
            delta_e: 0.0,
            message: message.to_owned(),
        };

        assert_eq!(
            format_clash_warnings(&[warning("first"), warning("second")]),
            "- first\n- second"
        );
    }
}
