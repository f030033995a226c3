//! `trip-route` — route provider seam and route model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`itinerary`] | `Itinerary`, `Leg`, `Step` — provider response shapes        |
//! | [`provider`]  | `RouteProvider` trait, `Waypoint`, `DirectionsRequest`        |
//! | [`route`]     | `Route`, `Segment` — normalized route consumed by the tracker |
//! | [`markup`]    | `strip_markup` for provider instruction HTML                  |
//! | [`fixed`]     | `StaticProvider` — in-memory provider for tests and offline   |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                                |

pub mod error;
pub mod fixed;
pub mod itinerary;
pub mod markup;
pub mod provider;
pub mod route;


pub use error::{RouteError, RouteResult};
pub use fixed::StaticProvider;
pub use itinerary::{Itinerary, Leg, Step};
pub use markup::strip_markup;
pub use provider::{DirectionsRequest, RouteProvider, Waypoint};
pub use route::{Route, Segment, format_distance};
