// Path: crates/cli/src/commands/mod.rs

pub mod run;
pub mod serve;
pub mod smoke;
