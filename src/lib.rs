pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod scanner;
pub mod writer;
