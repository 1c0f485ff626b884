use strum::{AsRefStr, Display, EnumString};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignedOfficial {
    pub official_id: String,
    pub role_id: String,
    pub role_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficialRequirement {
    pub role_id: String,
    pub role_name: String,
    pub minimum_count: u32,
    /// Zero means unlimited.
    pub maximum_count: u32,
    pub is_mandatory: bool,
    pub description: String,
}

/// Where a set of official requirements comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum RuleSource {
    #[default]
    Sport,
    Competition,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficialValidationError {
    pub role_id: String,
    pub role_name: String,
    pub required_count: u32,
    pub assigned_count: u32,
    pub message: String,
    pub rule_source: RuleSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficialValidationWarning {
    pub role_id: String,
    pub role_name: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficialValidationResult {
    pub is_valid: bool,
    pub errors: Vec<OfficialValidationError>,
    pub warnings: Vec<OfficialValidationWarning>,
}

pub fn validate_fixture_officials(
    assigned_officials: &[AssignedOfficial],
    requirements: &[OfficialRequirement],
    rule_source: RuleSource,
) -> OfficialValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for requirement in requirements {
        let assigned_count = assigned_officials
            .iter()
            .filter(|official| official.role_id == requirement.role_id)
            .count() as u32;

        if requirement.is_mandatory && assigned_count < requirement.minimum_count {
            errors.push(OfficialValidationError {
                role_id: requirement.role_id.clone(),
                role_name: requirement.role_name.clone(),
                required_count: requirement.minimum_count,
                assigned_count,
                message: format!(
                    "{}: Need at least {}, assigned {assigned_count}",
                    requirement.role_name, requirement.minimum_count
                ),
                rule_source,
            });
        }

        if requirement.maximum_count > 0 && assigned_count > requirement.maximum_count {
            warnings.push(OfficialValidationWarning {
                role_id: requirement.role_id.clone(),
                role_name: requirement.role_name.clone(),
                message: format!(
                    "{}: Maximum is {}, assigned {assigned_count}",
                    requirement.role_name, requirement.maximum_count
                ),
            });
        }
    }

    OfficialValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Officiating crew of a regular football match.
pub fn default_official_requirements() -> Vec<OfficialRequirement> {
    let requirement = |role_id: &str,
                       role_name: &str,
                       min: u32,
                       max: u32,
                       mandatory: bool,
                       description: &str| {
        OfficialRequirement {
            role_id: role_id.to_owned(),
            role_name: role_name.to_owned(),
            minimum_count: min,
            maximum_count: max,
            is_mandatory: mandatory,
            description: description.to_owned(),
        }
    };

    vec![
        requirement(
            "referee",
            "Main Referee",
            1,
            1,
            true,
            "The main official who enforces the rules",
        ),
        requirement(
            "assistant_referee",
            "Assistant Referee",
            2,
            2,
            true,
            "Linesmen who assist with offside and out-of-bounds calls",
        ),
        requirement(
            "fourth_official",
            "Fourth Official",
            0,
            1,
            false,
            "Manages substitutions and technical area",
        ),
        requirement(
            "var_official",
            "VAR Official",
            0,
            2,
            false,
            "Video Assistant Referee for reviewing decisions",
        ),
    ]
}
