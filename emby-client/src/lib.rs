// Emby Skip-Intro Client Library
//
// This crate provides HTTP client functionality for resolving episode
// metadata and writing intro/credits chapter markers on an Emby server.

mod client;
mod config;
mod errors;

pub use client::EmbyClient;
pub use config::EmbyConfig;
pub use errors::ClientError;
