use deunicode::deunicode;

use crate::models::TeamRef;

/// Orders teams for bracket seeding: alphabetically by name, ignoring case and diacritics.
///
/// Names that only differ in case or accents keep a stable order by their raw form.
pub fn seeded_order(teams: &[TeamRef]) -> Vec<&TeamRef> {
    let mut seeded: Vec<&TeamRef> = teams.iter().collect();
    seeded.sort_by_cached_key(|team| (name_sort_key(&team.name), team.name.clone()));
    seeded
}

fn name_sort_key(name: &str) -> String {
    deunicode(name).to_lowercase()
}
