#![forbid(unsafe_code)]

use std::process::exit;

use anyhow::Context;
use fixture_planner::{
    check_jersey_colors,
    config::{AppConfig, FixturePlan},
    generate_fixtures_from_format,
    utils::formatting::{format_clash_warnings, ScheduleTable},
    ClashReport,
};
use indoc::formatdoc;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = dotenvy::dotenv() {
        warn!("Could not load config from .env file: {err}");
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    "fixture_planner=info"
                        .parse()
                        .expect("Hard-coded default directive should be correct"),
                )
                .from_env_lossy(),
        )
        .init();

    let app_config = match envy::from_env::<AppConfig>() {
        Ok(config) => config,
        Err(err) => {
            error!("Could not load app config: {err}");
            exit(255);
        }
    };

    if let Err(err) = run(app_config) {
        error!("{err:#}");
        exit(255);
    }
}

#[tracing::instrument(skip_all, fields(competition = %app_config.competition_id))]
fn run(app_config: AppConfig) -> anyhow::Result<()> {
    let plan = app_config.into_plan().context("Invalid fixture settings")?;

    let fixtures = match plan.request() {
        Some(request) => {
            let format = &request.competition_format;

            if let Err(problems) = format.validate() {
                for problem in problems {
                    debug!("Using defaults for {}: {problem}", format.code);
                }
            }

            if format.format_type.produces_bracket_skeleton() {
                info!("Bracket rounds after the first are placeholders until results are known");
            }

            let mut rng = match plan.shuffle_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            info!(
                "Generating {} fixtures for {} teams",
                format.name,
                request.teams.len()
            );

            generate_fixtures_from_format(&request, &mut rng)
        }
        None => Vec::new(),
    };

    for fixture in &fixtures {
        if let Err(problems) = fixture.validate() {
            for problem in problems {
                warn!("Fixture on match day {}: {problem}", fixture.match_day);
            }
        }
    }

    debug!("Checking jersey colors");
    let clash_report = jersey_report(&plan);

    print!(
        "{}",
        formatdoc! {"
            {competition} ({fixture_count} fixtures)

            {schedule}
            Jersey colors:
            {clashes}
            ",
            competition = plan.options.competition_id,
            fixture_count = fixtures.len(),
            schedule = ScheduleTable::new(&fixtures, &plan.teams),
            clashes = format_clash_warnings(&clash_report.warnings),
        }
    );

    Ok(())
}

fn jersey_report(plan: &FixturePlan) -> ClashReport {
    check_jersey_colors(
        plan.jerseys.home.as_ref(),
        plan.jerseys.away.as_ref(),
        plan.jerseys.officials.as_ref(),
        "Home Team",
        "Away Team",
    )
}
