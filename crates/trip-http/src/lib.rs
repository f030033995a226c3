//! `trip-http` — live collaborators backed by HTTP services.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                          |
//! |------------|-------------------------------------------------------------------|
//! | [`google`] | `GoogleMapsProvider` — Geocoding + Directions `RouteProvider`     |
//! | [`openai`] | `OpenAiOracle` — chat-completions `SuggestionOracle`              |
//! | `agent`    | shared `ureq` agent construction and error text                   |
//!
//! Every request is a single blocking call bounded by
//! `TripConfig::request_timeout_ms`.  Nothing is retried.

mod agent;
pub mod google;
pub mod openai;


pub use google::GoogleMapsProvider;
pub use openai::OpenAiOracle;
