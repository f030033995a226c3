//! `trip-core` — foundational types for the drive-sim trip simulator.
//!
//! Every other `trip-*` crate depends on this one.  It has no `trip-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`                                            |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `TripConfig` and its defaults                         |
//! | [`transport`]   | `TravelMode` enum                                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (JSON `TripConfig`) |

pub mod config;
pub mod error;
pub mod geo;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TripConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use time::{SimClock, Tick};
pub use transport::TravelMode;
