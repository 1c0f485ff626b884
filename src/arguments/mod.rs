//! Parsers for the textual inputs of the command line surface.

mod iso_date;
mod kickoff_time;
mod team_list;

pub use iso_date::IsoDate;
pub use kickoff_time::KickoffTime;
pub use team_list::TeamList;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{message}")]
    InvalidArgument { message: String },
}

pub fn invalid_argument(message: String) -> ArgumentError {
    ArgumentError::InvalidArgument { message }
}
