use log::warn;
use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

use crate::errors::Error;
use crate::modules::dataset::Dataset;
use crate::modules::models::experiment::EvolutionPoint;

/// # get the training evolution of an experiment
#[get("/experiments/<experiment_id>/evolution")]
pub fn evolution(
    experiment_id: String,
    dataset: &State<Dataset>,
) -> Result<Json<Vec<EvolutionPoint>>, Status> {
    let experiment = match dataset.experiment(&experiment_id) {
        Ok(experiment) => experiment,
        Err(error) => {
            warn!(target: "routes/api/experiment:evolution", "{}", error);
            return Err(Status::NotFound);
        }
    };

    match experiment.evolution(dataset) {
        Ok(points) => Ok(Json(points)),
        Err(error) => {
            warn!(target: "routes/api/experiment:evolution", "{}", error);
            Err(match error {
                Error::InsufficientDataError { .. } => Status::UnprocessableEntity,
                _ => Status::NotFound,
            })
        }
    }
}
