pub mod provider;
pub mod secure;

pub use provider::{SeededProvider, UniformProvider};
pub use secure::SecureProvider;
