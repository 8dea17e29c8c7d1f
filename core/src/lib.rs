pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod telemetry;

pub use config::GreeterConfig;
pub use event::{GreetingBody, RequestEvent, Response};
pub use handler::{Greeter, handle};
