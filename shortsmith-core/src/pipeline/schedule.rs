//! Publishing schedule

use chrono::Duration;

use crate::catalog::{CTA_LIBRARY, RELEASE_WINDOWS};
use crate::clock::Clock;
use crate::random::RandomSource;
use crate::types::{ChannelProfile, ReleasePlan, VideoIdea};

/// Ideas that get a release slot
pub const MAX_RELEASES: usize = 4;

/// Days between consecutive releases. Fixed; `profile.cadence` is display-only.
pub const RELEASE_SPACING_DAYS: i64 = 2;

/// Maximum words kept in a hashtag
const HASHTAG_WORDS: usize = 3;

/// Plan releases for the first [`MAX_RELEASES`] ideas, in input order.
///
/// Release `i` lands `2i + 1` days from now, so the first goes out tomorrow.
pub fn create_publishing_schedule<R: RandomSource, C: Clock>(
    ideas: &[VideoIdea],
    profile: &ChannelProfile,
    rng: &mut R,
    clock: &C,
) -> Vec<ReleasePlan> {
    let now = clock.now();
    let keywords = profile.effective_keywords();

    let schedule: Vec<ReleasePlan> = ideas
        .iter()
        .take(MAX_RELEASES)
        .enumerate()
        .map(|(index, idea)| {
            let window = RELEASE_WINDOWS[index % RELEASE_WINDOWS.len()];
            let offset = index as i64 * RELEASE_SPACING_DAYS + 1;
            ReleasePlan {
                id: rng.token(),
                title: idea.title.clone(),
                date: now + Duration::days(offset),
                optimal_window: window.label.to_string(),
                cta: rng.pick(&CTA_LIBRARY).to_string(),
                hashtags: vec![
                    format_hashtag(&profile.niche),
                    format_hashtag(&idea.framework),
                    format_hashtag(rng.pick(&keywords).as_str()),
                ],
                reasoning: window.reason.to_string(),
            }
        })
        .collect();

    tracing::debug!(releases = schedule.len(), "Built publishing schedule");
    schedule
}

/// Turn free text into a camel-cased hashtag.
///
/// Drops everything outside `[A-Za-z0-9 ]`, keeps at most three words, then
/// lowercases the first word and capitalizes the rest:
/// `"AI tools, for solo creators!"` becomes `#aiToolsFor`. Blank input
/// yields a bare `#`.
pub fn format_hashtag(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    let body: String = cleaned
        .split(' ')
        .filter(|word| !word.is_empty())
        .take(HASHTAG_WORDS)
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_ascii_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect();

    format!("#{}", body)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = first.to_ascii_uppercase().to_string();
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}
