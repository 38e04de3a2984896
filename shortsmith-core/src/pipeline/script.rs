//! Script building

use crate::catalog::CTA_LIBRARY;
use crate::random::RandomSource;
use crate::types::{ChannelProfile, ScriptPlan, ScriptSegment, SegmentRole, VideoIdea};

/// Expand one idea into a four-segment script.
///
/// Durations and pacing are fixed per role; only the copy and the call to
/// action vary.
pub fn build_script<R: RandomSource>(
    idea: &VideoIdea,
    profile: &ChannelProfile,
    rng: &mut R,
) -> ScriptPlan {
    let segments = SegmentRole::ALL
        .iter()
        .map(|&role| ScriptSegment {
            label: role,
            duration: role.duration(),
            pace: role.pace(),
            content: segment_copy(role, idea, profile),
        })
        .collect();

    let script = ScriptPlan {
        idea_id: idea.id.clone(),
        title: idea.title.clone(),
        promise: format!("Ship a {} short in under 15 minutes.", profile.niche),
        segments,
        call_to_action: rng.pick(&CTA_LIBRARY).to_string(),
    };

    tracing::debug!(idea_id = %script.idea_id, title = %script.title, "Built script");
    script
}

fn segment_copy(role: SegmentRole, idea: &VideoIdea, profile: &ChannelProfile) -> String {
    match role {
        SegmentRole::Hook => idea.hook.replacen("Here is", "Here’s", 1),
        SegmentRole::Payoff => format!(
            "Step 1: Capture raw inputs. Drop your daily ideas into the “{} Inbox” using voice notes or the AI capture widget.",
            profile.channel_name
        ),
        SegmentRole::Proof => "Watch how the automation stitches a script, captions, and b-roll markers in under 90 seconds. Overlay the growth spike screenshot to validate.".to_string(),
        SegmentRole::Cta => format!(
            "Remind them the workflow is built for {}. Flash the three-step checklist while you prime the CTA.",
            profile.audience
        ),
    }
}
