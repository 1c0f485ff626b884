use deunicode::deunicode_char;

use crate::models::TeamId;

/// Derives a team id from its display name, e.g. `"Real Madrid C.F."` becomes `"RealMadridCF"`.
pub fn team_id_from_name(name: &str) -> TeamId {
    TeamId(slugify_camel(name))
}

fn slugify_camel(str: &str) -> String {
    let mut slug = String::with_capacity(str.len());

    let mut is_start_of_word = false;
    let mut add_char = |c: char| {
        match c {
            '0'..='9' | 'A'..='Z' => slug.push(c),
            'a'..='z' if is_start_of_word => slug.push(c.to_ascii_uppercase()),
            'a'..='z' if !is_start_of_word => slug.push(c),

            _ => (),
        }

        is_start_of_word = !c.is_ascii_alphanumeric();
    };

    for char in str.chars() {
        if char.is_ascii() {
            add_char(char);
        } else if let Some(deunicoded) = deunicode_char(char) {
            deunicoded.chars().for_each(&mut add_char);
        }
    }

    slug.shrink_to_fit();
    slug
}

#[cfg(test)]
mod tests {
    use super::{slugify_camel, team_id_from_name};

    #[test]
    fn club_name() {
        assert_eq!(team_id_from_name("Real Madrid C.F.").0, "RealMadridCF");
    }

    #[test]
    fn lower_case_words() {
        assert_eq!(slugify_camel("borussia dortmund 09"), "borussiaDortmund09");
    }

    #[test]
    fn punctuation_and_symbols() {
        assert_eq!(
            slugify_camel("Brighton & Hove Albion"),
            "BrightonHoveAlbion"
        );
    }

    #[test]
    fn non_ascii_translit() {
        assert_eq!(slugify_camel("Beşiktaş J.K."), "BesiktasJK");
        assert_eq!(slugify_camel("Спартак Москва"), "SpartakMoskva");
    }
}
