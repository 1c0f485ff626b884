use std::{fmt::Display, str::FromStr};

use lazy_regex::regex_captures;
use time::Time;

use super::ArgumentError;

const EXAMPLE: &str = "15:00";

fn invalid_argument(message: String) -> ArgumentError {
    super::invalid_argument(format!("{message}\nTime example: `{EXAMPLE}`."))
}

/// Kickoff time of day, `HH:MM` on a 24 hour clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KickoffTime(Time);

impl From<KickoffTime> for Time {
    fn from(value: KickoffTime) -> Self {
        value.0
    }
}

impl FromStr for KickoffTime {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        let Some((_, hour, minute)) = regex_captures!(r"^(\d{1,2}):(\d{2})$", token) else {
            return Err(invalid_argument(format!("Invalid time: `{token}`.")));
        };

        let hour = hour
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid hour: `{hour}`.")))?;
        let minute = minute
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid minute: `{minute}`.")))?;

        Time::from_hms(hour, minute, 0)
            .map(KickoffTime)
            .map_err(|_| invalid_argument(format!("Invalid time: `{token}`.")))
    }
}

/// Always two digit hours and minutes.
impl Display for KickoffTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}
