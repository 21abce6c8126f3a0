//! Request construction, timed execution and client dispatch.
mod client;
mod execution;
mod plan;
mod request;
mod sender;
mod transport;
mod worker;


pub use client::TransportSettings;
pub use plan::RunPlan;
pub use request::RequestSpec;
pub use sender::run_clients;
pub use transport::{CallSite, Reply, ReqwestTransport, Transport};
