//! Idea generation

use crate::catalog::{TREND_PAIRINGS, VIRAL_FRAMES};
use crate::random::RandomSource;
use crate::types::{ChannelProfile, VideoIdea};

/// Ideas produced per launch
pub const IDEA_BATCH_SIZE: usize = 6;

const SCORE_FLOOR: u32 = 78;
const SCORE_SPAN: u32 = 22;

/// Generate a batch of [`IDEA_BATCH_SIZE`] ideas for a profile.
///
/// Each slot draws its framework, trend pairing and title keyword
/// independently. The hook always uses the first keyword (or the niche when
/// there are no keywords).
pub fn generate_ideas<R: RandomSource>(profile: &ChannelProfile, rng: &mut R) -> Vec<VideoIdea> {
    let keywords = profile.effective_keywords();
    let base_keyword = keywords[0].as_str();
    let niche_head = profile.niche_head();

    let ideas: Vec<VideoIdea> = (0..IDEA_BATCH_SIZE)
        .map(|_| {
            let frame = rng.pick(&VIRAL_FRAMES);
            let trend_pairing = *rng.pick(&TREND_PAIRINGS);
            let keyword = rng.pick(&keywords);
            let title = format!("{}: {} for {}", frame.label, keyword, niche_head);
            let potential_score = potential_score(&format!("{}{}", title, trend_pairing));

            VideoIdea {
                id: rng.token(),
                hook: frame.hook(base_keyword),
                framework: frame.label.to_string(),
                trend_pairing: trend_pairing.to_string(),
                potential_score,
                title,
            }
        })
        .collect();

    tracing::debug!(
        channel = %profile.channel_name,
        count = ideas.len(),
        "Generated ideas"
    );

    ideas
}

/// Cheap, reproducible quality score for a seed string.
///
/// Sums the leading UTF-16 code unit of every character, then maps the sum
/// into `78..=99`.
pub fn potential_score(seed: &str) -> u32 {
    let mut buf = [0u16; 2];
    let sum: u64 = seed
        .chars()
        .map(|c| u64::from(c.encode_utf16(&mut buf)[0]))
        .sum();
    SCORE_FLOOR + (sum % u64::from(SCORE_SPAN)) as u32
}
