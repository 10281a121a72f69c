pub mod app;
pub mod browse;
pub mod cli;
pub mod config;
pub mod directory;
pub mod output;
pub mod runner;
pub mod search;
pub mod utils;
pub mod view;

#[cfg(test)]
mod tests;
