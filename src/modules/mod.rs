pub mod dataset;

pub mod models {
    pub mod car;
    pub mod experiment;
    pub mod race;
    pub mod team_summary;
}

pub mod helpers {
    pub mod logging;
    pub mod math;

    pub mod handelbars {
        pub mod format_distance;
        pub mod format_time;
        pub mod to_json;
    }
}
