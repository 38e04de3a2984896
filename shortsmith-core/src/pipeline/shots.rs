//! Shot planning

use crate::catalog::{FALLBACK_OVERLAY, SHOT_OVERLAYS};
use crate::random::RandomSource;
use crate::types::{ScriptPlan, SegmentRole, ShotPlan};

/// Derive one shot per script segment, index-aligned with `script.segments`.
///
/// Category and direction follow the segment's role. Overlays follow the
/// segment's position; positions past the overlay catalog get the generic
/// "watch again" sticker.
pub fn create_shotlist<R: RandomSource>(script: &ScriptPlan, rng: &mut R) -> Vec<ShotPlan> {
    script
        .segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| ShotPlan {
            id: rng.token(),
            headline: headline(&segment.content).to_string(),
            direction: direction(segment.label).to_string(),
            category: segment.label.shot_category(),
            overlay: SHOT_OVERLAYS
                .get(idx)
                .copied()
                .unwrap_or(FALLBACK_OVERLAY)
                .to_string(),
            duration: segment.duration,
        })
        .collect()
}

/// Text before the first period, or all of it
fn headline(content: &str) -> &str {
    content
        .split_once('.')
        .map(|(head, _)| head)
        .unwrap_or(content)
}

fn direction(role: SegmentRole) -> &'static str {
    match role {
        SegmentRole::Hook => {
            "Start with a tight crop, aggressive energy, punch-in on every hook beat."
        }
        SegmentRole::Payoff => {
            "Screen record automation dashboard, highlight the drag-and-drop workflow."
        }
        SegmentRole::Proof => {
            "Cut to testimonial overlay, drop in retention chart with smooth zoom."
        }
        SegmentRole::Cta => "End with direct eye contact and gesture to the subscribe sticker.",
    }
}
