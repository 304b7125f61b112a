//! Chaotic transaction stream synthesis and analysis.
//!
//! The pipeline has three stages: a regime-switching [`SequenceGenerator`]
//! produces an integer sequence, an optional [`Enhancer`] pass amplifies
//! it, and the [`MetricsEngine`] summarizes the result. Every random draw
//! flows through [`UniformProvider`], so a seeded or scripted provider
//! makes a whole run reproducible.

pub mod config;
pub mod engines;
pub mod error;
pub mod random;
pub mod reporters;
pub mod types;

pub use config::{AppConfig, GeneratorConfig, OutputConfig};
pub use engines::generation::{Enhancer, SequenceGenerator};
pub use engines::metrics::MetricsEngine;
pub use error::{ChaosimError, Result};
pub use random::{SecureProvider, SeededProvider, UniformProvider};
pub use types::{AnalysisReport, Regime, SequenceStats, StepRecord};
