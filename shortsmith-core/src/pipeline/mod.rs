//! The planning pipeline
//!
//! Ideas feed both the schedule (whole batch) and the script (selected idea).
//! The script feeds the shotlist; script and schedule feed the task board.
//!
//! Each generator is a single synchronous pass over its inputs. Randomness
//! and time arrive through [`RandomSource`](crate::random::RandomSource) and
//! [`Clock`](crate::clock::Clock); nothing else is shared.

mod ideas;
mod schedule;
mod script;
mod session;
mod shots;
mod tasks;

pub use ideas::{generate_ideas, potential_score, IDEA_BATCH_SIZE};
pub use schedule::{
    create_publishing_schedule, format_hashtag, MAX_RELEASES, RELEASE_SPACING_DAYS,
};
pub use script::build_script;
pub use session::PlanSession;
pub use shots::create_shotlist;
pub use tasks::{build_production_tasks, resync_script_notes};
