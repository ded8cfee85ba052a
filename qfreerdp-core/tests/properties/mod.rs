//! Property test modules

mod config_tests;
mod experience_tests;
mod freerdp_tests;
mod generators;
mod resolution_tests;
