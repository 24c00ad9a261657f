//! CLI argument types and parsing helpers.
mod cli;
mod parsers;


pub use cli::SamplerArgs;
