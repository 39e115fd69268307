pub mod run;

pub use run::handle_run_command;
