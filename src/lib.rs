pub mod cli;
pub mod client;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod predictor;
pub mod render;
pub mod request;
pub mod teams;
