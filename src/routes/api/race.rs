use log::warn;
use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

use crate::modules::dataset::Dataset;
use crate::modules::models::race::RankedStandingsRow;

/// # get the ranked standings of a race
#[get("/races/<race_id>/standings")]
pub fn standings(
    race_id: String,
    dataset: &State<Dataset>,
) -> Result<Json<Vec<RankedStandingsRow>>, Status> {
    let race = match dataset.race(&race_id) {
        Ok(race) => race,
        Err(error) => {
            warn!(target: "routes/api/race:standings", "{}", error);
            return Err(Status::NotFound);
        }
    };

    match race.standings(dataset) {
        Ok(rows) => Ok(Json(rows)),
        Err(error) => {
            warn!(target: "routes/api/race:standings", "{}", error);
            Err(Status::NotFound)
        }
    }
}
