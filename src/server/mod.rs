//! Backend server: forecast endpoint, feedback endpoint, counter hub.

mod forecast;
mod hub;
mod router;
mod server;

pub use forecast::sample_forecasts;
pub use hub::CounterHub;
pub use router::{build_router, ServerState};
pub use server::{AppServer, ServerError};
