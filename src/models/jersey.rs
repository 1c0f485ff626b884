#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JerseyColorAssignment {
    pub jersey_color_id: String,
    /// Hex color, 3 or 6 digits, with or without a leading `#`.
    pub main_color: String,
    pub nickname: String,
}

impl JerseyColorAssignment {
    pub fn new(
        jersey_color_id: impl Into<String>,
        main_color: impl Into<String>,
        nickname: impl Into<String>,
    ) -> JerseyColorAssignment {
        JerseyColorAssignment {
            jersey_color_id: jersey_color_id.into(),
            main_color: main_color.into(),
            nickname: nickname.into(),
        }
    }
}

/// Advisory about two parties on the field wearing similar colors. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorClashWarning {
    pub party_a: String,
    pub party_b: String,
    /// Normalized `#RRGGBB` color of `party_a`.
    pub color: String,
    pub delta_e: f64,
    pub message: String,
}
