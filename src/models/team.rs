use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(pub String);

impl Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TeamId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        TeamId(value.to_owned())
    }
}

impl From<String> for TeamId {
    fn from(value: String) -> Self {
        TeamId(value)
    }
}

/// A participant as seen by the scheduler.
///
/// Only `id` takes part in pairing. `name` decides the seeding order of bracket formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> TeamRef {
        TeamRef {
            id: id.into(),
            name: name.into(),
        }
    }
}
