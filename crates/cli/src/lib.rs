pub mod cli;
pub mod listing;
pub mod logging;
pub mod params;
pub mod run;
pub mod settings;
pub mod styles;
