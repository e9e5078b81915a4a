pub mod network;
pub mod params;

pub use network::{forward, Activations, Network, TrainedNetwork};
pub use params::Parameters;
