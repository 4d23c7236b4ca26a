use log::warn;
use rocket::get;
use rocket::State;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::dataset::Dataset;
use crate::TableData;

#[derive(Serialize)]
struct TemplateDataRace {
    race_id: String,
    table_data: TableData,
    winner_name: Option<String>,
    winner_time: Option<f64>,
}

#[get("/<race_id>")]
pub fn single(race_id: String, dataset: &State<Dataset>) -> Template {
    match build_race_page(&race_id, dataset) {
        Ok(data) => Template::render("race", data),
        Err(error) => {
            warn!(target: "routes/race:single", "{}", error);
            Template::render("error", context! { message: error.to_string() })
        }
    }
}

fn build_race_page(race_id: &str, dataset: &Dataset) -> CustomResult<TemplateDataRace> {
    let race = dataset.race(race_id)?;
    let standings = race.standings(dataset)?;

    Ok(TemplateDataRace {
        race_id: race_id.to_string(),
        winner_name: standings.first().map(|row| row.racer_name.clone()),
        winner_time: standings.first().and_then(|row| row.elapsed_time),
        table_data: TableData::from_standings(&standings),
    })
}
