use std::str::FromStr;

use strum::Display;
use tracing::{debug, warn};

use crate::models::{ColorClashWarning, JerseyColorAssignment};

use super::{ColorParseError, HexColor, Lab};

/// Pairs closer than this in ΔE are reported.
pub const CLASH_THRESHOLD: f64 = 25.0;

/// Distance assumed for a pair with an unreadable color.
pub const UNPARSEABLE_DELTA_E: f64 = 100.0;

pub const OFFICIALS_PARTY: &str = "Officials";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Similarity {
    #[strum(serialize = "nearly identical")]
    NearlyIdentical,
    #[strum(serialize = "very similar")]
    VerySimilar,
    #[strum(serialize = "similar")]
    Similar,
}

impl Similarity {
    /// `None` when the colors are far enough apart not to clash.
    pub fn of(delta_e: f64) -> Option<Similarity> {
        if delta_e < 5.0 {
            Some(Similarity::NearlyIdentical)
        } else if delta_e < 15.0 {
            Some(Similarity::VerySimilar)
        } else if delta_e < CLASH_THRESHOLD {
            Some(Similarity::Similar)
        } else {
            None
        }
    }
}

/// What to make of a pair whose colors could not all be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClashPolicy {
    /// Treat it as no clash.
    #[default]
    FailOpen,
    /// Treat it as a clash.
    FailClosed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnparsedColor {
    pub party: String,
    pub color: String,
    pub error: ColorParseError,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClashReport {
    pub warnings: Vec<ColorClashWarning>,
    /// Colors of compared parties that are not valid hex, once per party.
    pub unparsed: Vec<UnparsedColor>,
}

impl ClashReport {
    pub fn has_clashes(&self, policy: ClashPolicy) -> bool {
        match policy {
            ClashPolicy::FailOpen => !self.warnings.is_empty(),
            ClashPolicy::FailClosed => !self.warnings.is_empty() || !self.unparsed.is_empty(),
        }
    }
}

struct Party<'a> {
    name: &'a str,
    jersey: &'a JerseyColorAssignment,
    color: Result<HexColor, ColorParseError>,
}

/// Compares the jerseys of everyone on the field, in the order home/away, home/officials,
/// away/officials. Absent parties are skipped.
#[tracing::instrument(skip_all)]
pub fn check_jersey_colors(
    home: Option<&JerseyColorAssignment>,
    away: Option<&JerseyColorAssignment>,
    officials: Option<&JerseyColorAssignment>,
    home_team_name: &str,
    away_team_name: &str,
) -> ClashReport {
    let parties = [
        (home_team_name, home),
        (away_team_name, away),
        (OFFICIALS_PARTY, officials),
    ]
    .map(|(name, jersey)| {
        jersey.map(|jersey| Party {
            name,
            jersey,
            color: HexColor::from_str(&jersey.main_color),
        })
    });

    let mut report = ClashReport::default();
    let mut reported_unparsed = [false; 3];

    for (first, second) in [(0, 1), (0, 2), (1, 2)] {
        let (Some(party_a), Some(party_b)) = (&parties[first], &parties[second]) else {
            continue;
        };

        match (&party_a.color, &party_b.color) {
            (Ok(color_a), Ok(color_b)) => {
                let delta_e = Lab::from(*color_a).delta_e(&Lab::from(*color_b));

                if let Some(similarity) = Similarity::of(delta_e) {
                    debug!(
                        "{} and {} clash with Delta E {delta_e:.1}",
                        party_a.name, party_b.name
                    );

                    report.warnings.push(ColorClashWarning {
                        party_a: party_a.name.to_owned(),
                        party_b: party_b.name.to_owned(),
                        color: color_a.to_string(),
                        delta_e,
                        message: format!(
                            "{} and {} have {similarity} jersey colors (Delta E: {delta_e:.1})",
                            party_a.name, party_b.name
                        ),
                    });
                }
            }
            _ => {
                for (index, party) in [(first, party_a), (second, party_b)] {
                    if let Err(err) = &party.color {
                        if !reported_unparsed[index] {
                            warn!("Not comparing the jersey of {}: {err}", party.name);
                            reported_unparsed[index] = true;
                            report.unparsed.push(UnparsedColor {
                                party: party.name.to_owned(),
                                color: party.jersey.main_color.clone(),
                                error: err.clone(),
                            });
                        }
                    }
                }
            }
        }
    }

    report
}

/// Jersey color clashes, counting unreadable colors as no clash.
pub fn detect_jersey_color_clashes(
    home: Option<&JerseyColorAssignment>,
    away: Option<&JerseyColorAssignment>,
    officials: Option<&JerseyColorAssignment>,
    home_team_name: &str,
    away_team_name: &str,
) -> Vec<ColorClashWarning> {
    check_jersey_colors(home, away, officials, home_team_name, away_team_name).warnings
}

pub fn has_color_clashes(
    home: Option<&JerseyColorAssignment>,
    away: Option<&JerseyColorAssignment>,
    officials: Option<&JerseyColorAssignment>,
    home_team_name: &str,
    away_team_name: &str,
) -> bool {
    check_jersey_colors(home, away, officials, home_team_name, away_team_name)
        .has_clashes(ClashPolicy::FailOpen)
}

/// ΔE between two hex colors, or [`UNPARSEABLE_DELTA_E`] if either is not valid hex.
pub fn color_delta_e(color_a: &str, color_b: &str) -> f64 {
    match (HexColor::from_str(color_a), HexColor::from_str(color_b)) {
        (Ok(a), Ok(b)) => Lab::from(a).delta_e(&Lab::from(b)),
        (Err(err), _) | (_, Err(err)) => {
            warn!("Treating colors `{color_a}` and `{color_b}` as distinct: {err}");
            UNPARSEABLE_DELTA_E
        }
    }
}

/// Exact match of two color strings, ignoring case and surrounding whitespace.
pub fn is_color_match(color_a: &str, color_b: &str) -> bool {
    let color_a = color_a.trim();
    let color_b = color_b.trim();

    !color_a.is_empty() && !color_b.is_empty() && color_a.eq_ignore_ascii_case(color_b)
}

pub fn check_main_color_clash(
    jersey_a: &JerseyColorAssignment,
    jersey_b: &JerseyColorAssignment,
) -> bool {
    is_color_match(&jersey_a.main_color, &jersey_b.main_color)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::{
        colors::ColorParseError,
        models::{ColorClashWarning, JerseyColorAssignment},
    };

    use super::{
        check_jersey_colors, check_main_color_clash, color_delta_e, detect_jersey_color_clashes,
        has_color_clashes, is_color_match, ClashPolicy, Similarity, UnparsedColor,
        UNPARSEABLE_DELTA_E,
    };

    fn jersey(color: &str) -> JerseyColorAssignment {
        JerseyColorAssignment::new(format!("jersey_{color}"), color, "Test Jersey")
    }

    fn clashes(
        home: Option<&str>,
        away: Option<&str>,
        officials: Option<&str>,
    ) -> Vec<ColorClashWarning> {
        let home = home.map(jersey);
        let away = away.map(jersey);
        let officials = officials.map(jersey);

        detect_jersey_color_clashes(
            home.as_ref(),
            away.as_ref(),
            officials.as_ref(),
            "Home Team",
            "Away Team",
        )
    }

    fn parties(warnings: &[ColorClashWarning]) -> Vec<(&str, &str)> {
        warnings
            .iter()
            .map(|w| (w.party_a.as_str(), w.party_b.as_str()))
            .collect()
    }

    #[test]
    fn identical_home_and_away() {
        let warnings = clashes(Some("#1F2937"), Some("#1F2937"), None);

        assert_eq!(warnings.len(), 1);
        assert_eq!(parties(&warnings), vec![("Home Team", "Away Team")]);
        assert_eq!(warnings[0].delta_e, 0.0);
        assert_eq!(warnings[0].color, "#1F2937");
        assert_eq!(
            warnings[0].message,
            "Home Team and Away Team have nearly identical jersey colors (Delta E: 0.0)"
        );
    }

    #[test]
    fn home_and_officials() {
        let warnings = clashes(Some("#1F2937"), Some("#FBBF24"), Some("#1F2937"));

        assert_eq!(parties(&warnings), vec![("Home Team", "Officials")]);
    }

    #[test]
    fn away_and_officials_without_home() {
        let warnings = clashes(None, Some("#DC2626"), Some("#DC2626"));

        assert_eq!(parties(&warnings), vec![("Away Team", "Officials")]);
        assert!(warnings
            .iter()
            .all(|w| w.party_a != "Home Team" && w.party_b != "Home Team"));
    }

    #[test]
    fn all_three_identical() {
        let warnings = clashes(Some("#000000"), Some("#000000"), Some("#000000"));

        assert_eq!(
            parties(&warnings),
            vec![
                ("Home Team", "Away Team"),
                ("Home Team", "Officials"),
                ("Away Team", "Officials"),
            ]
        );
    }

    #[test]
    fn similar_shades_clash() {
        let warnings = clashes(Some("#1F2937"), Some("#111827"), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "Home Team and Away Team have very similar jersey colors (Delta E: 8.3)"
        );

        assert_eq!(clashes(Some("#DC2626"), Some("#EF4444"), None).len(), 1);

        let warnings = clashes(Some("#FFFFFF"), Some("#CCCCCC"), None);
        assert_eq!(
            warnings[0].message,
            "Home Team and Away Team have similar jersey colors (Delta E: 18.0)"
        );
    }

    #[test]
    fn distinct_colors_do_not_clash() {
        assert!(clashes(Some("#DC2626"), Some("#2563EB"), None).is_empty());
        assert!(clashes(Some("#000000"), Some("#FFFFFF"), None).is_empty());
        assert!(clashes(Some("#DC2626"), Some("#16A34A"), None).is_empty());
        assert!(clashes(Some("#FBBF24"), Some("#1E3A8A"), Some("#FFFFFF")).is_empty());
    }

    #[test]
    fn short_and_unprefixed_hex() {
        let warnings = clashes(Some("#000"), Some("#000000"), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].delta_e, 0.0);

        let warnings = clashes(Some("1F2937"), Some("#1F2937"), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].color, "#1F2937");
    }

    #[test]
    fn nothing_assigned() {
        assert!(clashes(None, None, None).is_empty());
        assert!(clashes(Some("#000000"), None, None).is_empty());
    }

    #[test]
    fn has_color_clashes_wrapper() {
        let black = jersey("#000000");
        let red = jersey("#DC2626");
        let blue = jersey("#2563EB");

        assert!(has_color_clashes(Some(&black), Some(&black), None, "A", "B"));
        assert!(!has_color_clashes(Some(&red), Some(&blue), None, "A", "B"));
    }

    #[test]
    fn unparseable_color_fails_open_by_default() {
        let warnings = clashes(Some("not a color"), Some("#000000"), Some("#000000"));
        assert_eq!(parties(&warnings), vec![("Away Team", "Officials")]);

        let bad = jersey("#12345");
        let black = jersey("#000000");
        assert!(!has_color_clashes(Some(&bad), Some(&black), None, "A", "B"));
    }

    #[test]
    fn report_lists_unparsed_colors_once() {
        let bad = jersey("#XYZ");
        let black = jersey("#000000");

        let report = check_jersey_colors(Some(&bad), Some(&black), Some(&black), "A", "B");

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.unparsed,
            vec![UnparsedColor {
                party: "A".to_owned(),
                color: "#XYZ".to_owned(),
                error: ColorParseError::NotHex {
                    color: "#XYZ".to_owned()
                },
            }]
        );
    }

    #[test]
    fn fail_closed_policy() {
        let bad = jersey("");
        let white = jersey("#FFFFFF");

        let report = check_jersey_colors(Some(&bad), Some(&white), None, "A", "B");

        assert!(report.warnings.is_empty());
        assert!(!report.has_clashes(ClashPolicy::FailOpen));
        assert!(report.has_clashes(ClashPolicy::FailClosed));
    }

    #[test]
    fn lone_unparseable_party_is_not_reported() {
        let bad = jersey("#nope");
        let report = check_jersey_colors(Some(&bad), None, None, "A", "B");

        assert!(report.unparsed.is_empty());
        assert!(!report.has_clashes(ClashPolicy::FailClosed));
    }

    #[test]
    fn similarity_bands() {
        assert_eq!(Similarity::of(0.0), Some(Similarity::NearlyIdentical));
        assert_eq!(Similarity::of(4.99), Some(Similarity::NearlyIdentical));
        assert_eq!(Similarity::of(5.0), Some(Similarity::VerySimilar));
        assert_eq!(Similarity::of(15.0), Some(Similarity::Similar));
        assert_eq!(Similarity::of(24.99), Some(Similarity::Similar));
        assert_eq!(Similarity::of(25.0), None);
        assert_eq!(Similarity::NearlyIdentical.to_string(), "nearly identical");
    }

    #[test]
    fn delta_e_of_strings() {
        assert_eq!(color_delta_e("#abc", "#AABBCC"), 0.0);
        assert_eq!(color_delta_e("#000000", "blue"), UNPARSEABLE_DELTA_E);
        assert_eq!(color_delta_e("", "#000000"), UNPARSEABLE_DELTA_E);
    }

    #[test]
    fn exact_color_match() {
        assert!(is_color_match("#DC2626", " #dc2626 "));
        assert!(!is_color_match("#DC2626", "#DC2627"));
        assert!(!is_color_match("", ""));
        assert!(!is_color_match("#000", "#000000"));

        assert!(check_main_color_clash(&jersey("#fff"), &jersey("#FFF")));
        assert!(!check_main_color_clash(&jersey("#fff"), &jersey("#000")));
    }
}
