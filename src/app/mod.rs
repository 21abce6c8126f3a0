mod export;
mod plan;
mod runner;
pub(crate) mod summary;


pub(crate) use plan::build_local_run;
pub(crate) use runner::run_local;
