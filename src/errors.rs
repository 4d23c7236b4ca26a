use snafu::Snafu;

pub type CustomResult<T> = Result<T, Error>;

/// every way a render can fail. all of these are terminal for the current
/// request, there is no retry or recovery anywhere in this system.
#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Car: {car_id} not found"))]
    CarNotFoundError { car_id: String },

    #[snafu(display("Race: {race_id} not found"))]
    RaceNotFoundError { race_id: String },

    #[snafu(display("Experiment: {experiment_id} not found"))]
    ExperimentNotFoundError { experiment_id: String },

    #[snafu(display("Team {team} has no round named {round}"))]
    RoundNotFoundError { team: String, round: String },

    #[snafu(display("File does not exist: {path}"))]
    FileDoesNotExistError { path: String },

    #[snafu(display("Permission denied: {path}"))]
    PermissionDeniedError { path: String },

    #[snafu(display("Malformed input in {path}: {reason}"))]
    MalformedInputError { path: String, reason: String },

    #[snafu(display("Not enough data: needed {needed} values but only {available} available"))]
    InsufficientDataError { needed: usize, available: usize },
}
