use log::warn;
use rocket::get;
use rocket::State;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::dataset::Dataset;
use crate::modules::models::team_summary::RoundSummary;
use crate::{ChartData, TableData};

#[derive(Serialize)]
struct TemplateDataSummary {
    team: String,
    round: String,
    training: Option<TrainingSection>,
    simulation: Option<SimulationSection>,
}

#[derive(Serialize)]
struct TrainingSection {
    track: String,
    video: String,
    final_standings: TableData,
    distance_chart: ChartData,
    time_chart: ChartData,
}

#[derive(Serialize)]
struct SimulationSection {
    video: String,
    results: Vec<SimulationResult>,
}

#[derive(Serialize)]
struct SimulationResult {
    experiment_id: String,
    track: String,
    final_standings: TableData,
}

#[get("/")]
pub fn index(dataset: &State<Dataset>) -> Template {
    #[derive(Serialize)]
    struct TemplateDataIndexTeam {
        name: String,
        rounds: Vec<String>,
    }

    let teams: Vec<TemplateDataIndexTeam> = dataset
        .team_summary
        .teams()
        .iter()
        .map(|(name, rounds)| TemplateDataIndexTeam {
            name: name.to_string(),
            rounds: rounds.keys().cloned().collect(),
        })
        .collect();

    Template::render("index", context! { teams })
}

#[get("/teams/<team>/<round>")]
pub fn single(team: String, round: String, dataset: &State<Dataset>) -> Template {
    let round_summary = match dataset.team_summary.round(&team, &round) {
        Ok(round_summary) => round_summary,
        Err(error) => {
            warn!(target: "routes/summary:single", "{}", error);
            return Template::render("error", context! { message: error.to_string() });
        }
    };

    let training = if round_summary.evolution_exp.is_empty() {
        None
    } else {
        match build_training_section(dataset, round_summary) {
            Ok(section) => Some(section),
            Err(error) => {
                warn!(target: "routes/summary:single", "{}", error);
                return Template::render("error", context! { message: error.to_string() });
            }
        }
    };

    let simulation = if round_summary.simulation_exp.is_empty() {
        None
    } else {
        match build_simulation_section(dataset, round_summary) {
            Ok(section) => Some(section),
            Err(error) => {
                warn!(target: "routes/summary:single", "{}", error);
                return Template::render("error", context! { message: error.to_string() });
            }
        }
    };

    Template::render(
        "summary",
        TemplateDataSummary {
            team,
            round,
            training,
            simulation,
        },
    )
}

/// the training part of a round: track, video, the final result of the
/// exhibition race and the evolution charts over all generations
fn build_training_section(
    dataset: &Dataset,
    round_summary: &RoundSummary,
) -> CustomResult<TrainingSection> {
    let experiment = dataset.experiment(&round_summary.evolution_exp)?;
    let exhibition = dataset.race(&experiment.exhibition_race)?;

    let standings = exhibition.standings(dataset)?;
    let points = experiment.evolution(dataset)?;

    Ok(TrainingSection {
        track: experiment.track_name().to_string(),
        video: round_summary.evolution_video.clone(),
        final_standings: TableData::from_standings(&standings),
        distance_chart: ChartData::evolution_distance(&points),
        time_chart: ChartData::evolution_time(&points),
    })
}

/// the simulation part of a round: one exhibition result per simulation
/// experiment the team took part in
fn build_simulation_section(
    dataset: &Dataset,
    round_summary: &RoundSummary,
) -> CustomResult<SimulationSection> {
    let mut results = Vec::with_capacity(round_summary.simulation_exp.len());

    for experiment_id in &round_summary.simulation_exp {
        let experiment = dataset.experiment(experiment_id)?;
        let exhibition = dataset.race(&experiment.exhibition_race)?;
        let standings = exhibition.standings(dataset)?;

        results.push(SimulationResult {
            experiment_id: experiment_id.to_string(),
            track: experiment.track_name().to_string(),
            final_standings: TableData::from_standings(&standings),
        });
    }

    Ok(SimulationSection {
        video: round_summary.simulation_video.clone(),
        results,
    })
}
