pub mod chart;
pub mod dataset;
pub mod record;
pub mod settings;
pub mod stats;
