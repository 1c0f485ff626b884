use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;
use time::Date;

use crate::utils::formatting::format_iso_date;

use super::{officials::AssignedOfficial, team::TeamId};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Postponed,
    Cancelled,
}

impl FixtureStatus {
    pub fn label(&self) -> &'static str {
        use FixtureStatus::*;

        match self {
            Scheduled => "Scheduled",
            InProgress => "In Progress",
            Completed => "Completed",
            Postponed => "Postponed",
            Cancelled => "Cancelled",
        }
    }
}

/// Venue policy of a generated schedule.
///
/// Only `SingleVenue` assigns a venue; the other policies leave it for the caller.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum VenueRotation {
    #[default]
    HomeAway,
    Neutral,
    SingleVenue,
}

/// A fixture produced by the scheduler, not yet persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureDraft {
    pub competition_id: String,
    pub round_number: u32,
    pub round_name: String,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub venue: String,
    pub scheduled_date: Date,
    pub scheduled_time: String,
    pub match_day: u32,
    pub notes: String,
    pub status: FixtureStatus,
    pub assigned_officials: Vec<AssignedOfficial>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FixtureValidationError {
    #[error("Competition is required")]
    MissingCompetition,
    #[error("Home team is required")]
    MissingHomeTeam,
    #[error("Away team is required")]
    MissingAwayTeam,
    #[error("Home and away teams must be different")]
    SameTeams,
    #[error("Scheduled time is required")]
    MissingScheduledTime,
    #[error("Round number must be at least 1")]
    InvalidRoundNumber,
}

impl FixtureDraft {
    pub fn scheduled_date_iso(&self) -> String {
        format_iso_date(self.scheduled_date)
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        &self.home_team_id == team || &self.away_team_id == team
    }

    pub fn validate(&self) -> Result<(), Vec<FixtureValidationError>> {
        use FixtureValidationError::*;

        let mut errors = Vec::new();

        let home = self.home_team_id.as_ref();
        let away = self.away_team_id.as_ref();

        if self.competition_id.is_empty() {
            errors.push(MissingCompetition);
        }
        if home.is_empty() {
            errors.push(MissingHomeTeam);
        }
        if away.is_empty() {
            errors.push(MissingAwayTeam);
        }
        if !home.is_empty() && home == away {
            errors.push(SameTeams);
        }
        if self.scheduled_time.is_empty() {
            errors.push(MissingScheduledTime);
        }
        if self.round_number < 1 {
            errors.push(InvalidRoundNumber);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
