use std::{fmt::Display, str::FromStr};

use lazy_regex::regex_captures;
use time::{Date, Month};

use super::ArgumentError;

const EXAMPLE: &str = "2024-08-17";

fn invalid_argument(message: String) -> ArgumentError {
    super::invalid_argument(format!("{message}\nDate example: `{EXAMPLE}`."))
}

/// A calendar date written as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsoDate(Date);

impl From<IsoDate> for Date {
    fn from(value: IsoDate) -> Self {
        value.0
    }
}

impl FromStr for IsoDate {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        let Some((_, year, month, day)) = regex_captures!(r"^(\d{4})-(\d{2})-(\d{2})$", token)
        else {
            return Err(invalid_argument(format!("Invalid date: `{token}`.")));
        };

        let year = year
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid year: `{year}`.")))?;
        let month: u8 = month
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid month: `{month}`.")))?;
        let day = day
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid day: `{day}`.")))?;

        let month = Month::try_from(month)
            .map_err(|_| invalid_argument(format!("Invalid month: `{month}`.")))?;

        Date::from_calendar_date(year, month, day)
            .map(IsoDate)
            .map_err(|_| invalid_argument(format!("Invalid date: `{token}`.")))
    }
}

impl Display for IsoDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::utils::formatting::format_iso_date(self.0))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use time::{macros::date, Date};

    use super::{IsoDate, EXAMPLE};

    #[test]
    fn example() {
        assert_eq!(
            Date::from(IsoDate::from_str(EXAMPLE).unwrap()),
            date!(2024 - 08 - 17)
        );
    }

    #[test]
    fn leap_day() {
        assert_eq!(
            Date::from(IsoDate::from_str(" 2024-02-29 ").unwrap()),
            date!(2024 - 02 - 29)
        );
        assert!(IsoDate::from_str("2023-02-29").is_err());
    }

    #[test]
    fn display_round_trips_text() {
        assert_eq!(
            IsoDate::from_str("2025-01-05").unwrap().to_string(),
            "2025-01-05"
        );
    }

    #[test]
    fn invalid() {
        assert!(IsoDate::from_str("").is_err());
        assert!(IsoDate::from_str("17.08.2024").is_err());
        assert!(IsoDate::from_str("2024-13-01").is_err());
        assert!(IsoDate::from_str("2024-08-17T15:00").is_err());
        assert!(IsoDate::from_str("2024-8-17").is_err());
    }

    #[test]
    fn message_lists_example() {
        let err = IsoDate::from_str("tomorrow").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date: `tomorrow`.\nDate example: `2024-08-17`."
        );
    }
}
