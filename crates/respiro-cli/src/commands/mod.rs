pub mod config;
pub mod phases;
pub mod run;
pub mod simulate;
