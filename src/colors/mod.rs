//! Jersey color clash detection based on the CIE76 color difference.

mod clash;
mod hex;
mod lab;

pub use clash::{
    check_jersey_colors, check_main_color_clash, color_delta_e, detect_jersey_color_clashes,
    has_color_clashes, is_color_match, ClashPolicy, ClashReport, Similarity, UnparsedColor,
    CLASH_THRESHOLD, OFFICIALS_PARTY, UNPARSEABLE_DELTA_E,
};
pub use hex::{ColorParseError, HexColor};
pub use lab::Lab;
