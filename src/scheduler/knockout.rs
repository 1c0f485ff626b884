use tracing::{debug, trace};

use crate::{models::TeamRef, utils::seeding::seeded_order};

use super::{calendar::ROUND_INTERVAL, BracketSkeleton, MatchCalendar, ScheduleOptions};

/// Name of a knockout round by the number of teams entering it.
pub fn knockout_round_name(teams_in_round: usize) -> String {
    match teams_in_round {
        2 => "Final".to_owned(),
        4 => "Semi-Final".to_owned(),
        8 => "Quarter-Final".to_owned(),
        n => format!("Round of {n}"),
    }
}

/// Single elimination bracket over teams seeded by name.
///
/// Consecutive teams are paired; an odd team out gets no fixture in that round. Match days
/// count fixtures, rounds are a week apart.
#[tracing::instrument(skip(options, teams), fields(teams = teams.len()))]
pub fn generate_knockout_fixtures(options: &ScheduleOptions, teams: &[TeamRef]) -> BracketSkeleton {
    let mut current_round = seeded_order(teams);
    let mut calendar = MatchCalendar::starting(options.start_date);
    let mut round_number = 1;
    let mut match_day = 1;
    let mut fixtures = Vec::new();

    while current_round.len() > 1 {
        let round_name = knockout_round_name(current_round.len());

        if current_round.len() % 2 != 0 {
            debug!(
                "{} has no opponent in {round_name}",
                current_round[current_round.len() - 1].name
            );
        }

        for pair in current_round.chunks_exact(2) {
            fixtures.push(options.draft(
                round_number,
                &round_name,
                (&pair[0].id, &pair[1].id),
                calendar.date(),
                match_day,
            ));
            match_day += 1;
        }

        trace!("Scheduled {round_name} on {}", calendar.date());

        calendar.advance(ROUND_INTERVAL);
        round_number += 1;
        current_round.truncate(current_round.len().div_ceil(2));
    }

    debug!("Generated {} knockout fixtures", fixtures.len());

    BracketSkeleton::new(fixtures)
}

#[cfg(test)]
mod tests {
    use test_log::test;
    use time::macros::date;

    use crate::{
        models::TeamRef,
        scheduler::test_support::{options, pairs, teams},
    };

    use super::{generate_knockout_fixtures, knockout_round_name};

    #[test]
    fn round_names() {
        assert_eq!(knockout_round_name(2), "Final");
        assert_eq!(knockout_round_name(4), "Semi-Final");
        assert_eq!(knockout_round_name(8), "Quarter-Final");
        assert_eq!(knockout_round_name(16), "Round of 16");
        assert_eq!(knockout_round_name(6), "Round of 6");
    }

    #[test]
    fn eight_team_bracket() {
        let bracket = generate_knockout_fixtures(&options(), &teams(8));

        assert_eq!(bracket.fixtures().len(), 7);
        assert_eq!(bracket.round_count(), 3);

        let names: Vec<_> = bracket
            .fixtures()
            .iter()
            .map(|f| f.round_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Quarter-Final",
                "Quarter-Final",
                "Quarter-Final",
                "Quarter-Final",
                "Semi-Final",
                "Semi-Final",
                "Final",
            ]
        );

        let match_days: Vec<_> = bracket.fixtures().iter().map(|f| f.match_day).collect();
        assert_eq!(match_days, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn positional_advancement() {
        let bracket = generate_knockout_fixtures(&options(), &teams(8));

        assert_eq!(
            pairs(bracket.fixtures()),
            vec![
                ("t1", "t2"),
                ("t3", "t4"),
                ("t5", "t6"),
                ("t7", "t8"),
                ("t1", "t2"),
                ("t3", "t4"),
                ("t1", "t2"),
            ]
        );

        let dates: Vec<_> = [1, 2, 3]
            .into_iter()
            .map(|round| bracket.round(round)[0].scheduled_date)
            .collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 08 - 17),
                date!(2024 - 08 - 24),
                date!(2024 - 08 - 31)
            ]
        );
    }

    #[test]
    fn seeds_by_name_not_input_order() {
        let teams = vec![
            TeamRef::new("z", "Zenit"),
            TeamRef::new("a", "Ajax"),
            TeamRef::new("m", "Malmö FF"),
            TeamRef::new("l", "Lazio"),
        ];

        let bracket = generate_knockout_fixtures(&options(), &teams);

        assert_eq!(
            pairs(bracket.fixtures()),
            vec![("a", "l"), ("m", "z"), ("a", "l")]
        );
    }

    #[test]
    fn odd_team_out_is_dropped() {
        let bracket = generate_knockout_fixtures(&options(), &teams(5));

        assert_eq!(
            pairs(bracket.fixtures()),
            vec![("t1", "t2"), ("t3", "t4"), ("t1", "t2"), ("t1", "t2")]
        );
        assert_eq!(bracket.round(1)[0].round_name, "Round of 5");
        assert_eq!(bracket.round(2)[0].round_name, "Round of 3");
        assert_eq!(bracket.round(3)[0].round_name, "Final");
    }

    #[test]
    fn powers_of_two_produce_n_minus_one_fixtures() {
        for count in [2, 4, 8, 16, 32] {
            let bracket = generate_knockout_fixtures(&options(), &teams(count));
            assert_eq!(bracket.fixtures().len(), count - 1);
            assert_eq!(bracket.round_count(), count.trailing_zeros() as usize);
        }
    }

    #[test]
    fn nothing_to_play() {
        assert!(generate_knockout_fixtures(&options(), &teams(0)).is_empty());
        assert!(generate_knockout_fixtures(&options(), &teams(1)).is_empty());
    }
}
