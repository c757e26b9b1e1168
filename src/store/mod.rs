pub mod audit;
pub mod master;
pub mod photos;
pub mod visit_log;
