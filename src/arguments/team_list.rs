use std::{collections::HashSet, str::FromStr};

use crate::{models::TeamRef, utils::slug::team_id_from_name};

use super::ArgumentError;

const EXAMPLE_1: &str = "ajax=AFC Ajax, psv=PSV Eindhoven";
const EXAMPLE_2: &str = "AFC Ajax, PSV Eindhoven";

fn invalid_argument(message: String) -> ArgumentError {
    super::invalid_argument(format!(
        "{message}\nTeam list examples: `{EXAMPLE_1}`, `{EXAMPLE_2}`."
    ))
}

/// Comma separated teams, each either `id=Name` or just `Name`.
///
/// A team given by name alone gets the camel-cased slug of its name as id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamList(Vec<TeamRef>);

impl From<TeamList> for Vec<TeamRef> {
    fn from(value: TeamList) -> Self {
        value.0
    }
}

impl AsRef<[TeamRef]> for TeamList {
    fn as_ref(&self) -> &[TeamRef] {
        &self.0
    }
}

impl FromStr for TeamList {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut teams = Vec::new();
        let mut seen_ids = HashSet::new();

        let entries = s.split(',').map(str::trim);

        for entry in entries.filter(|entry| !entry.is_empty()) {
            let team = match entry.split_once('=') {
                Some((id, name)) => {
                    let (id, name) = (id.trim(), name.trim());
                    if id.is_empty() || name.is_empty() {
                        return Err(invalid_argument(format!("Invalid team: `{entry}`.")));
                    }
                    TeamRef::new(id, name)
                }
                None => {
                    let id = team_id_from_name(entry);
                    if id.as_ref().is_empty() {
                        return Err(invalid_argument(format!(
                            "Cannot derive an id from team name `{entry}`, give one as `id={entry}`."
                        )));
                    }
                    TeamRef::new(id, entry)
                }
            };

            if !seen_ids.insert(team.id.clone()) {
                let message = format!("Duplicate team id: `{}`.", team.id);
                return Err(invalid_argument(message));
            }

            teams.push(team);
        }

        if teams.is_empty() {
            return Err(invalid_argument("No teams provided.".to_string()));
        }

        Ok(TeamList(teams))
    }
}
