use log::warn;
use rocket::get;
use rocket::State;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::dataset::Dataset;
use crate::{ChartData, TableData};

#[derive(Serialize)]
struct TemplateDataExperiment {
    experiment_id: String,
    track: String,
    exhibition_standings: TableData,
    distance_chart: ChartData,
    time_chart: ChartData,
    best_distance: Option<f64>,
}

#[get("/<experiment_id>")]
pub fn single(experiment_id: String, dataset: &State<Dataset>) -> Template {
    match build_experiment_page(&experiment_id, dataset) {
        Ok(data) => Template::render("experiment", data),
        Err(error) => {
            warn!(target: "routes/experiment:single", "{}", error);
            Template::render("error", context! { message: error.to_string() })
        }
    }
}

fn build_experiment_page(
    experiment_id: &str,
    dataset: &Dataset,
) -> CustomResult<TemplateDataExperiment> {
    let experiment = dataset.experiment(experiment_id)?;
    let exhibition = dataset.race(&experiment.exhibition_race)?;

    let standings = exhibition.standings(dataset)?;
    let points = experiment.evolution(dataset)?;

    Ok(TemplateDataExperiment {
        experiment_id: experiment_id.to_string(),
        track: experiment.track_name().to_string(),
        exhibition_standings: TableData::from_standings(&standings),
        best_distance: points.last().map(|point| point.top1_distance),
        distance_chart: ChartData::evolution_distance(&points),
        time_chart: ChartData::evolution_time(&points),
    })
}
