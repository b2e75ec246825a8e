pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod directory;
pub mod output;
pub mod session;
pub mod utils;

#[cfg(test)]
mod tests;
