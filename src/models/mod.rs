mod competition_format;
mod fixture;
mod jersey;
mod officials;
mod team;

pub use competition_format::{
    default_competition_formats, CompetitionFormat, FormatType, FormatValidationError,
    GroupStageConfig, KnockoutStageConfig, LeagueConfig, TieBreaker,
};
pub use fixture::{FixtureDraft, FixtureStatus, FixtureValidationError, VenueRotation};
pub use jersey::{ColorClashWarning, JerseyColorAssignment};
pub use officials::{
    default_official_requirements, validate_fixture_officials, AssignedOfficial,
    OfficialRequirement, OfficialValidationError, OfficialValidationResult,
    OfficialValidationWarning, RuleSource,
};
pub use team::{TeamId, TeamRef};
