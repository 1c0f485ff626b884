use std::num::{NonZeroU32, NonZeroUsize};

use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FormatType {
    League,
    RoundRobin,
    GroupsKnockout,
    StraightKnockout,
    GroupsPlayoffs,
    DoubleElimination,
    Swiss,
    Custom,
}

impl FormatType {
    pub fn label(&self) -> &'static str {
        use FormatType::*;

        match self {
            League => "League",
            RoundRobin => "Round Robin",
            GroupsKnockout => "Groups + Knockout",
            StraightKnockout => "Straight Knockout",
            GroupsPlayoffs => "Groups + Playoffs",
            DoubleElimination => "Double Elimination",
            Swiss => "Swiss System",
            Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        use FormatType::*;

        match self {
            League => "Teams play multiple rounds against each other",
            RoundRobin => "Each team plays every other team once",
            GroupsKnockout => "Group stage followed by knockout rounds",
            StraightKnockout => "Single elimination tournament",
            GroupsPlayoffs => "Group stage followed by playoff series",
            DoubleElimination => "Teams must lose twice to be eliminated",
            Swiss => "Teams paired based on similar records",
            Custom => "Custom format with manual fixture creation",
        }
    }

    /// Whether generated fixtures after the first round assume positional advancement
    /// instead of real results.
    pub fn produces_bracket_skeleton(&self) -> bool {
        matches!(
            self,
            FormatType::StraightKnockout
                | FormatType::GroupsPlayoffs
                | FormatType::DoubleElimination
        )
    }

    fn requires_group_stage_config(&self) -> bool {
        matches!(
            self,
            FormatType::GroupsKnockout | FormatType::GroupsPlayoffs
        )
    }

    fn requires_knockout_stage_config(&self) -> bool {
        matches!(
            self,
            FormatType::GroupsKnockout
                | FormatType::StraightKnockout
                | FormatType::DoubleElimination
        )
    }

    fn requires_league_config(&self) -> bool {
        matches!(self, FormatType::League | FormatType::RoundRobin)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TieBreaker {
    GoalDifference,
    HeadToHead,
    GoalsScored,
    AwayGoals,
    FairPlay,
    Draw,
    Playoff,
}

impl TieBreaker {
    pub fn label(&self) -> &'static str {
        use TieBreaker::*;

        match self {
            GoalDifference => "Goal Difference",
            HeadToHead => "Head to Head",
            GoalsScored => "Goals Scored",
            AwayGoals => "Away Goals",
            FairPlay => "Fair Play Points",
            Draw => "Draw/Lots",
            Playoff => "Playoff Match",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueConfig {
    /// How many times each pair of teams meets.
    pub number_of_rounds: NonZeroU32,
    pub points_for_win: u32,
    pub points_for_draw: u32,
    pub points_for_loss: u32,
    pub promotion_spots: u32,
    pub relegation_spots: u32,
    pub playoff_spots: u32,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig {
            number_of_rounds: NonZeroU32::new(2)
                .expect("Hard-coded round count should be non-zero"),
            points_for_win: 3,
            points_for_draw: 1,
            points_for_loss: 0,
            promotion_spots: 0,
            relegation_spots: 0,
            playoff_spots: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupStageConfig {
    pub number_of_groups: u32,
    /// Target group size; the actual group count is derived from it and the team count.
    pub teams_per_group: NonZeroUsize,
    pub teams_advancing_per_group: u32,
    pub matches_per_round: u32,
}

impl Default for GroupStageConfig {
    fn default() -> Self {
        GroupStageConfig {
            number_of_groups: 4,
            teams_per_group: NonZeroUsize::new(4)
                .expect("Hard-coded group size should be non-zero"),
            teams_advancing_per_group: 2,
            matches_per_round: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnockoutStageConfig {
    pub number_of_rounds: u32,
    pub third_place_match: bool,
    pub two_legged_ties: bool,
    pub away_goals_rule: bool,
    pub extra_time_enabled: bool,
    pub penalty_shootout_enabled: bool,
}

impl Default for KnockoutStageConfig {
    fn default() -> Self {
        KnockoutStageConfig {
            number_of_rounds: 4,
            third_place_match: true,
            two_legged_ties: false,
            away_goals_rule: false,
            extra_time_enabled: true,
            penalty_shootout_enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitionFormat {
    pub name: String,
    pub code: String,
    pub description: String,
    pub format_type: FormatType,
    pub tie_breakers: Vec<TieBreaker>,
    pub group_stage_config: Option<GroupStageConfig>,
    pub knockout_stage_config: Option<KnockoutStageConfig>,
    pub league_config: Option<LeagueConfig>,
    pub min_teams_required: u32,
    pub max_teams_allowed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Code is required")]
    MissingCode,
    #[error("Minimum teams required must be at least 2")]
    TooFewTeamsRequired,
    #[error("Maximum teams must be greater than or equal to minimum teams")]
    MaximumBelowMinimum,
    #[error("Group stage configuration is required for this format type")]
    MissingGroupStageConfig,
    #[error("Knockout stage configuration is required for this format type")]
    MissingKnockoutStageConfig,
    #[error("League configuration is required for this format type")]
    MissingLeagueConfig,
}

impl CompetitionFormat {
    /// A bare format of the given type without any sub-configuration.
    pub fn of_type(format_type: FormatType) -> CompetitionFormat {
        CompetitionFormat {
            name: format_type.label().to_owned(),
            code: format_type.to_string(),
            description: format_type.description().to_owned(),
            format_type,
            tie_breakers: vec![
                TieBreaker::GoalDifference,
                TieBreaker::HeadToHead,
                TieBreaker::GoalsScored,
            ],
            group_stage_config: None,
            knockout_stage_config: None,
            league_config: None,
            min_teams_required: 2,
            max_teams_allowed: 32,
        }
    }

    pub fn with_league_config(mut self, config: LeagueConfig) -> CompetitionFormat {
        self.league_config = Some(config);
        self
    }

    pub fn with_group_stage_config(mut self, config: GroupStageConfig) -> CompetitionFormat {
        self.group_stage_config = Some(config);
        self
    }

    pub fn with_knockout_stage_config(mut self, config: KnockoutStageConfig) -> CompetitionFormat {
        self.knockout_stage_config = Some(config);
        self
    }

    pub fn validate(&self) -> Result<(), Vec<FormatValidationError>> {
        use FormatValidationError::*;

        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(MissingName);
        }
        if self.code.trim().is_empty() {
            errors.push(MissingCode);
        }
        if self.min_teams_required < 2 {
            errors.push(TooFewTeamsRequired);
        }
        if self.max_teams_allowed < self.min_teams_required {
            errors.push(MaximumBelowMinimum);
        }
        if self.format_type.requires_group_stage_config() && self.group_stage_config.is_none() {
            errors.push(MissingGroupStageConfig);
        }
        if self.format_type.requires_knockout_stage_config()
            && self.knockout_stage_config.is_none()
        {
            errors.push(MissingKnockoutStageConfig);
        }
        if self.format_type.requires_league_config() && self.league_config.is_none() {
            errors.push(MissingLeagueConfig);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Ready-made formats offered when a new competition is set up.
pub fn default_competition_formats() -> Vec<CompetitionFormat> {
    use TieBreaker::*;

    vec![
        CompetitionFormat {
            name: "Standard League".to_owned(),
            code: "standard_league".to_owned(),
            description: "Traditional league format with home and away fixtures".to_owned(),
            format_type: FormatType::League,
            tie_breakers: vec![GoalDifference, HeadToHead, GoalsScored],
            group_stage_config: None,
            knockout_stage_config: None,
            league_config: Some(LeagueConfig::default()),
            min_teams_required: 4,
            max_teams_allowed: 24,
        },
        CompetitionFormat {
            name: "Single Round Robin".to_owned(),
            code: "single_round_robin".to_owned(),
            description: "Each team plays every other team once".to_owned(),
            format_type: FormatType::RoundRobin,
            tie_breakers: vec![GoalDifference, GoalsScored],
            group_stage_config: None,
            knockout_stage_config: None,
            league_config: Some(LeagueConfig {
                number_of_rounds: NonZeroU32::MIN,
                ..LeagueConfig::default()
            }),
            min_teams_required: 3,
            max_teams_allowed: 16,
        },
        CompetitionFormat {
            name: "World Cup Style".to_owned(),
            code: "world_cup_style".to_owned(),
            description: "Group stage followed by knockout rounds".to_owned(),
            format_type: FormatType::GroupsKnockout,
            tie_breakers: vec![GoalDifference, GoalsScored, HeadToHead, FairPlay],
            group_stage_config: Some(GroupStageConfig::default()),
            knockout_stage_config: Some(KnockoutStageConfig::default()),
            league_config: None,
            min_teams_required: 8,
            max_teams_allowed: 32,
        },
        CompetitionFormat {
            name: "Cup Tournament".to_owned(),
            code: "cup_tournament".to_owned(),
            description: "Single elimination knockout tournament".to_owned(),
            format_type: FormatType::StraightKnockout,
            tie_breakers: vec![Draw],
            group_stage_config: None,
            knockout_stage_config: Some(KnockoutStageConfig {
                third_place_match: false,
                ..KnockoutStageConfig::default()
            }),
            league_config: None,
            min_teams_required: 4,
            max_teams_allowed: 64,
        },
        CompetitionFormat {
            name: "Champions League Style".to_owned(),
            code: "champions_league_style".to_owned(),
            description: "Group stage with two-legged knockout rounds".to_owned(),
            format_type: FormatType::GroupsKnockout,
            tie_breakers: vec![GoalDifference, AwayGoals, GoalsScored],
            group_stage_config: Some(GroupStageConfig::default()),
            knockout_stage_config: Some(KnockoutStageConfig {
                two_legged_ties: true,
                away_goals_rule: true,
                ..KnockoutStageConfig::default()
            }),
            league_config: None,
            min_teams_required: 16,
            max_teams_allowed: 32,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;
    use test_log::test;

    use super::{
        default_competition_formats, CompetitionFormat, FormatType, FormatValidationError,
        GroupStageConfig, LeagueConfig,
    };

    #[test]
    fn format_type_codes_round_trip() {
        for format_type in FormatType::iter() {
            assert_eq!(
                FormatType::from_str(format_type.as_ref()).unwrap(),
                format_type
            );
        }
    }

    #[test]
    fn format_type_snake_case_codes() {
        assert_eq!(FormatType::GroupsPlayoffs.to_string(), "groups_playoffs");
        assert_eq!(
            FormatType::from_str("double_elimination").unwrap(),
            FormatType::DoubleElimination
        );
        assert!(FormatType::from_str("ladder").is_err());
    }

    #[test]
    fn every_format_type_has_label_and_description() {
        for format_type in FormatType::iter() {
            assert!(!format_type.label().is_empty());
            assert!(!format_type.description().is_empty());
        }
        assert_eq!(FormatType::Swiss.label(), "Swiss System");
    }

    #[test]
    fn default_formats_are_valid() {
        let formats = default_competition_formats();
        assert_eq!(formats.len(), 5);

        for format in formats {
            assert_eq!(format.validate(), Ok(()), "{}", format.name);
        }
    }

    #[test]
    fn validation_reports_every_problem() {
        let mut format = CompetitionFormat::of_type(FormatType::GroupsKnockout);
        format.name = "  ".to_owned();
        format.code = String::new();
        format.min_teams_required = 1;
        format.max_teams_allowed = 0;

        assert_eq!(
            format.validate(),
            Err(vec![
                FormatValidationError::MissingName,
                FormatValidationError::MissingCode,
                FormatValidationError::TooFewTeamsRequired,
                FormatValidationError::MaximumBelowMinimum,
                FormatValidationError::MissingGroupStageConfig,
                FormatValidationError::MissingKnockoutStageConfig,
            ])
        );
    }

    #[test]
    fn league_requires_league_config() {
        let format = CompetitionFormat::of_type(FormatType::League);
        assert_eq!(
            format.validate(),
            Err(vec![FormatValidationError::MissingLeagueConfig])
        );

        let format = format.with_league_config(LeagueConfig::default());
        assert_eq!(format.validate(), Ok(()));
    }

    #[test]
    fn groups_playoffs_needs_only_group_config() {
        let format = CompetitionFormat::of_type(FormatType::GroupsPlayoffs)
            .with_group_stage_config(GroupStageConfig::default());
        assert_eq!(format.validate(), Ok(()));
    }

    #[test]
    fn bracket_skeleton_formats() {
        assert!(FormatType::StraightKnockout.produces_bracket_skeleton());
        assert!(FormatType::DoubleElimination.produces_bracket_skeleton());
        assert!(!FormatType::League.produces_bracket_skeleton());
        assert!(!FormatType::Swiss.produces_bracket_skeleton());
    }
}
