use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, Error};
use crate::modules::dataset::Dataset;
use crate::modules::helpers::math::Math;
use crate::modules::models::race::RankedStandingsRow;

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct Experiment {
    pub race_track_path: String,
    pub races: Vec<String>,
    pub exhibition_race: String,
}

/// leader and pack statistics for one generation of an experiment.
/// the top4 values are absent when the race had fewer than four entries
/// or fewer than four finishers.
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct EvolutionPoint {
    pub generation: i32,
    pub top1_distance: f64,
    pub top4_distance: Option<f64>,
    pub top1_time: Option<f64>,
    pub top4_time: Option<f64>,
}

impl Experiment {
    /// # get the display name of the race track
    /// the track is stored as a file path, only the file stem is shown.
    /// `tracks/interlagos.trk` renders as `interlagos`.
    pub fn track_name(&self) -> &str {
        let filename = self.race_track_path.rsplit('/').next().unwrap_or_default();
        filename.split('.').next().unwrap_or(filename)
    }

    /// # get the training evolution of the experiment
    /// build the standings of every race in the experiment, in order, and
    /// reduce each to its leader/pack statistics. the position of a race
    /// in the sequence is its generation, starting at 1.
    ///
    /// ## Arguments
    /// * `dataset` - the loaded documents
    ///
    /// ## Returns
    /// * `Vec<EvolutionPoint>` - one point per race, in generation order
    pub fn evolution(&self, dataset: &Dataset) -> CustomResult<Vec<EvolutionPoint>> {
        let mut points = Vec::with_capacity(self.races.len());

        for (index, race_id) in self.races.iter().enumerate() {
            let race = dataset.race(race_id)?;
            let rows = race.standings(dataset)?;

            points.push(EvolutionPoint::from_standings(index as i32 + 1, &rows)?);
        }

        Ok(points)
    }
}

impl EvolutionPoint {
    fn from_standings(generation: i32, rows: &[RankedStandingsRow]) -> CustomResult<EvolutionPoint> {
        let distances: Vec<f64> = rows.iter().map(|row| row.distance).collect();
        let times: Vec<f64> = rows.iter().filter_map(|row| row.elapsed_time).collect();

        // a race with no entries has no leader at all
        let top1_distance = match Math::nth_best(&distances, 0, false) {
            Some(distance) => distance,
            None => {
                return Err(Error::InsufficientDataError {
                    needed: 1,
                    available: 0,
                })
            }
        };

        Ok(EvolutionPoint {
            generation,
            top1_distance,
            top4_distance: Math::nth_best(&distances, 3, false),
            top1_time: Math::nth_best(&times, 0, true),
            top4_time: Math::nth_best(&times, 3, true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dataset::Dataset;

    const CARS: &str = r#"{
        "0x01": {"alias": "Um", "front_decal_path": "decals/wolf-69.png"},
        "0x02": {"alias": "Dois", "front_decal_path": "decals/bread-search.png"},
        "0x03": {"alias": "Três", "front_decal_path": "decals/quimera.png"},
        "0x04": {"alias": "Quatro", "front_decal_path": "decals/marcha-atras.png"},
        "0x05": {"alias": "Cinco", "front_decal_path": "decals/meta-morfada.png"}
    }"#;

    // gen-1: five entries, four finishers. gen-2: three entries, one
    // finisher. gen-3: two entries, no finishers.
    const RACES: &str = r#"{
        "gen-1": {"standings": {
            "0x01": {"car_id": "0x01", "finished": true, "elapsed_time": 60.0, "max_progress": 1000.0},
            "0x02": {"car_id": "0x02", "finished": true, "elapsed_time": 61.0, "max_progress": 990.0},
            "0x03": {"car_id": "0x03", "finished": true, "elapsed_time": 64.0, "max_progress": 970.0},
            "0x04": {"car_id": "0x04", "finished": true, "elapsed_time": 66.5, "max_progress": 960.0},
            "0x05": {"car_id": "0x05", "finished": false, "elapsed_time": 0.0, "max_progress": 400.0}
        }},
        "gen-2": {"standings": {
            "0x01": {"car_id": "0x01", "finished": true, "elapsed_time": 58.0, "max_progress": 1000.0},
            "0x02": {"car_id": "0x02", "finished": false, "elapsed_time": 0.0, "max_progress": 700.0},
            "0x03": {"car_id": "0x03", "finished": false, "elapsed_time": 0.0, "max_progress": 650.0}
        }},
        "gen-3": {"standings": {
            "0x01": {"car_id": "0x01", "finished": false, "elapsed_time": 0.0, "max_progress": 300.0},
            "0x02": {"car_id": "0x02", "finished": false, "elapsed_time": 0.0, "max_progress": 250.0}
        }},
        "empty": {"standings": {}},
        "exhibition": {"standings": {
            "0x01": {"car_id": "0x01", "finished": true, "elapsed_time": 55.0, "max_progress": 1000.0}
        }}
    }"#;

    const EXPERIMENTS: &str = r#"{
        "0x00001": {
            "race_track_path": "tracks/interlagos.trk",
            "races": ["gen-1", "gen-2", "gen-3"],
            "exhibition_race": "exhibition"
        },
        "0x00002": {
            "race_track_path": "monza.trk",
            "races": ["gen-1", "empty"],
            "exhibition_race": "exhibition"
        },
        "0x00003": {
            "race_track_path": "tracks/spa.trk",
            "races": ["gen-1", "missing-race"],
            "exhibition_race": "exhibition"
        }
    }"#;

    fn dataset() -> Dataset {
        Dataset::from_json_strs(CARS, RACES, EXPERIMENTS, None).unwrap()
    }

    #[test]
    fn one_point_per_race_in_generation_order() {
        let dataset = dataset();
        let points = dataset
            .experiment("0x00001")
            .unwrap()
            .evolution(&dataset)
            .unwrap();

        assert_eq!(points.len(), 3);
        let generations: Vec<i32> = points.iter().map(|point| point.generation).collect();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    #[test]
    fn top1_distance_is_the_best_progress_of_each_race() {
        let dataset = dataset();
        let points = dataset
            .experiment("0x00001")
            .unwrap()
            .evolution(&dataset)
            .unwrap();

        assert_eq!(points[0].top1_distance, 1000.0);
        assert_eq!(points[1].top1_distance, 1000.0);
        assert_eq!(points[2].top1_distance, 300.0);
    }

    #[test]
    fn top4_distance_is_the_fourth_best_or_absent() {
        let dataset = dataset();
        let points = dataset
            .experiment("0x00001")
            .unwrap()
            .evolution(&dataset)
            .unwrap();

        assert_eq!(points[0].top4_distance, Some(960.0));
        // fewer than four entries
        assert_eq!(points[1].top4_distance, None);
        assert_eq!(points[2].top4_distance, None);
    }

    #[test]
    fn time_statistics_only_count_finishers() {
        let dataset = dataset();
        let points = dataset
            .experiment("0x00001")
            .unwrap()
            .evolution(&dataset)
            .unwrap();

        assert_eq!(points[0].top1_time, Some(60.0));
        assert_eq!(points[0].top4_time, Some(66.5));

        // one finisher: a leader time but no pack time
        assert_eq!(points[1].top1_time, Some(58.0));
        assert_eq!(points[1].top4_time, None);

        // no finishers at all
        assert_eq!(points[2].top1_time, None);
        assert_eq!(points[2].top4_time, None);
    }

    #[test]
    fn race_without_entries_is_insufficient_data() {
        let dataset = dataset();
        let result = dataset.experiment("0x00002").unwrap().evolution(&dataset);
        assert_eq!(
            result,
            Err(Error::InsufficientDataError {
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn unknown_race_reference_propagates() {
        let dataset = dataset();
        let result = dataset.experiment("0x00003").unwrap().evolution(&dataset);
        assert_eq!(
            result,
            Err(Error::RaceNotFoundError {
                race_id: "missing-race".to_string()
            })
        );
    }

    #[test]
    fn track_name_is_the_file_stem() {
        let dataset = dataset();
        assert_eq!(dataset.experiment("0x00001").unwrap().track_name(), "interlagos");
        assert_eq!(dataset.experiment("0x00002").unwrap().track_name(), "monza");
    }
}
