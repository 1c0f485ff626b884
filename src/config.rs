//! Settings of the command line surface, read from the environment.

use std::{
    num::{NonZeroU32, NonZeroUsize},
    str::FromStr,
};

use serde::Deserialize;
use time::Date;
use tracing::warn;

use crate::{
    arguments::{invalid_argument, ArgumentError, IsoDate, KickoffTime, TeamList},
    models::{
        CompetitionFormat, FormatType, GroupStageConfig, JerseyColorAssignment, LeagueConfig,
        TeamRef, VenueRotation,
    },
    scheduler::{FixtureGenerationRequest, ScheduleOptions},
};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_competition_id")]
    pub competition_id: String,
    pub teams: String,
    pub format_type: String,
    pub start_date: String,
    #[serde(default = "default_kickoff_time")]
    pub default_time: String,
    pub venue_rotation: Option<String>,
    pub single_venue: Option<String>,
    pub number_of_rounds: Option<NonZeroU32>,
    pub teams_per_group: Option<NonZeroUsize>,
    pub shuffle_seed: Option<u64>,
    pub home_color: Option<String>,
    pub away_color: Option<String>,
    pub officials_color: Option<String>,
}

fn default_competition_id() -> String {
    "competition".to_owned()
}

fn default_kickoff_time() -> String {
    "15:00".to_owned()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JerseyColors {
    pub home: Option<JerseyColorAssignment>,
    pub away: Option<JerseyColorAssignment>,
    pub officials: Option<JerseyColorAssignment>,
}

/// Everything the binary needs for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixturePlan {
    pub options: ScheduleOptions,
    pub teams: Vec<TeamRef>,
    /// `None` when the format type is not one the scheduler knows.
    pub competition_format: Option<CompetitionFormat>,
    pub shuffle_seed: Option<u64>,
    pub jerseys: JerseyColors,
}

impl FixturePlan {
    pub fn request(&self) -> Option<FixtureGenerationRequest> {
        self.competition_format
            .as_ref()
            .map(|competition_format| FixtureGenerationRequest {
                options: self.options.clone(),
                teams: self.teams.clone(),
                competition_format: competition_format.clone(),
            })
    }
}

impl AppConfig {
    pub fn into_plan(self) -> Result<FixturePlan, ArgumentError> {
        let teams: Vec<TeamRef> = TeamList::from_str(&self.teams)?.into();
        let start_date: Date = IsoDate::from_str(&self.start_date)?.into();
        let default_time = KickoffTime::from_str(&self.default_time)?.to_string();

        let venue_rotation = match &self.venue_rotation {
            Some(rotation) => VenueRotation::from_str(rotation.trim()).map_err(|_| {
                invalid_argument(format!(
                    "Invalid venue rotation: `{rotation}`.\nExpected one of `home_away`, `neutral`, `single_venue`."
                ))
            })?,
            None => VenueRotation::default(),
        };

        let single_venue = self
            .single_venue
            .map(|venue| venue.trim().to_owned())
            .filter(|venue| !venue.is_empty());

        if venue_rotation == VenueRotation::SingleVenue && single_venue.is_none() {
            warn!("Single venue rotation without SINGLE_VENUE, venues stay empty");
        }

        let competition_format = match FormatType::from_str(self.format_type.trim()) {
            Ok(format_type) => {
                let mut format = CompetitionFormat::of_type(format_type);

                if let Some(number_of_rounds) = self.number_of_rounds {
                    format = format.with_league_config(LeagueConfig {
                        number_of_rounds,
                        ..LeagueConfig::default()
                    });
                }

                if let Some(teams_per_group) = self.teams_per_group {
                    format = format.with_group_stage_config(GroupStageConfig {
                        teams_per_group,
                        ..GroupStageConfig::default()
                    });
                }

                Some(format)
            }
            Err(_) => {
                warn!(
                    "Unknown format type `{}`, no fixtures will be generated",
                    self.format_type
                );
                None
            }
        };

        let jersey = |color: Option<String>, party: &str| -> Option<JerseyColorAssignment> {
            let color = color.filter(|color| !color.trim().is_empty())?;
            let kit = format!("{party} kit");
            Some(JerseyColorAssignment::new(party.to_lowercase(), color, kit))
        };

        Ok(FixturePlan {
            options: ScheduleOptions {
                competition_id: self.competition_id,
                start_date,
                default_time,
                venue_rotation,
                single_venue,
            },
            teams,
            competition_format,
            shuffle_seed: self.shuffle_seed,
            jerseys: JerseyColors {
                home: jersey(self.home_color, "Home"),
                away: jersey(self.away_color, "Away"),
                officials: jersey(self.officials_color, "Officials"),
            },
        })
    }
}
