mod config;
mod seed;

pub use {
  config::Config,
  seed::{SeedNode, SeedNodes},
};
