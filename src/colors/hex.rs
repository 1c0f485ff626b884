use std::{fmt::Display, str::FromStr};

use lazy_regex::regex_is_match;

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Color is empty")]
    Empty,
    #[error("Color `{color}` contains characters that are not hex digits")]
    NotHex { color: String },
    #[error("Color `{color}` has {digits} hex digits, expected 3 or 6")]
    WrongLength { color: String, digits: usize },
}

/// An sRGB color written as `#RGB` or `#RRGGBB`, the `#` being optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> HexColor {
        HexColor { red, green, blue }
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = s.trim();
        let digits = color.strip_prefix('#').unwrap_or(color);

        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if !regex_is_match!(r"^[0-9a-fA-F]+$", digits) {
            return Err(ColorParseError::NotHex {
                color: color.to_owned(),
            });
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|digit| [digit, digit]).collect(),
            6 => digits.to_owned(),
            other => {
                return Err(ColorParseError::WrongLength {
                    color: color.to_owned(),
                    digits: other,
                })
            }
        };

        let channel = |offset: usize| {
            u8::from_str_radix(&expanded[offset..offset + 2], 16).map_err(|_| {
                ColorParseError::NotHex {
                    color: color.to_owned(),
                }
            })
        };

        Ok(HexColor {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
