//! # shortsmith-core
//!
//! Core library for shortsmith - a short-form video content planner.
//!
//! This library provides:
//! - Domain types for channel profiles, ideas, scripts, shots, releases and tasks
//! - The planning pipeline (ideas → script → shots → schedule → tasks)
//! - A planning session with the idea re-selection resync rule
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Every generator is a pure function over small in-memory records. The only
//! hidden inputs, randomness and the current time, are injected through the
//! [`RandomSource`] and [`Clock`] capabilities so tests can pin them down.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shortsmith_core::{ChannelProfile, PlanSession, SeededRandom, SystemClock};
//!
//! let mut session =
//!     PlanSession::new(ChannelProfile::default(), SeededRandom::new(7), SystemClock);
//! session.launch();
//! let plan = session.plan().expect("plan should exist after launch");
//! println!("{}", shortsmith_core::export::to_json(&plan).unwrap());
//! ```

// Re-export commonly used items at the crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{
    build_production_tasks, build_script, create_publishing_schedule, create_shotlist,
    format_hashtag, generate_ideas, potential_score, resync_script_notes, PlanSession,
};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use types::*;

// Public modules
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod logging;
pub mod pipeline;
pub mod random;
pub mod types;
