pub mod agent;
pub mod checkpoint;
pub mod errors;
pub mod phase;
pub mod tracker;
pub mod ui;
