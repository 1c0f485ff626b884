use time::{Date, Duration};

pub const ROUND_INTERVAL: Duration = Duration::weeks(1);
pub const GROUP_MATCH_INTERVAL: Duration = Duration::days(1);
pub const GROUP_BREAK: Duration = Duration::weeks(1);
pub const BRACKET_PASS_INTERVAL: Duration = Duration::days(1);
pub const PLAYOFF_OFFSET: Duration = Duration::days(60);

/// Walks forward over calendar dates. Dates carry no time zone, so every step is an exact
/// number of days.
#[derive(Clone, Copy, Debug)]
pub struct MatchCalendar {
    current: Date,
}

impl MatchCalendar {
    pub fn starting(date: Date) -> MatchCalendar {
        MatchCalendar { current: date }
    }

    pub fn date(&self) -> Date {
        self.current
    }

    pub fn advance(&mut self, by: Duration) {
        self.current = self.current.saturating_add(by);
    }
}
