pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;

pub fn init() {
    infra::logging::init_logging();
}
