//! Fixed policy tables the generators draw from.

/// A named hook framework
#[derive(Debug, Clone, Copy)]
pub struct ViralFrame {
    pub label: &'static str,
    /// Hook sentence with `{topic}` as the placeholder
    pub hook_template: &'static str,
}

impl ViralFrame {
    /// Apply the hook template to a topic
    pub fn hook(&self, topic: &str) -> String {
        self.hook_template.replace("{topic}", topic)
    }
}

pub const VIRAL_FRAMES: [ViralFrame; 5] = [
    ViralFrame {
        label: "Paradigm Shift",
        hook_template: "Everyone is doing {topic} wrong. Here is the new playbook.",
    },
    ViralFrame {
        label: "Rapid Challenge",
        hook_template: "Try this {topic} challenge for 3 days and watch your numbers explode.",
    },
    ViralFrame {
        label: "AI vs Human",
        hook_template: "I asked AI to build the perfect {topic} workflow. You need to see this.",
    },
    ViralFrame {
        label: "Zero to Mastery",
        hook_template: "Beginner to pro in 45 seconds: {topic} edition.",
    },
    ViralFrame {
        label: "Before / After",
        hook_template: "I swapped my old {topic} process for this. The difference? Insane.",
    },
];

pub const TREND_PAIRINGS: [&str; 7] = [
    "trendjack: “faceless creator grind”",
    "pattern interrupt: b-roll swap every 0.7s",
    "algorithm boost: story gap at 40%",
    "community proof: stitch invite CTA",
    "loop trigger: watch to the end for template drop",
    "creator economy: monetization angle",
    "data-driven: retention chart overlay",
];

/// Shared by the script builder and the schedule builder (independent draws)
pub const CTA_LIBRARY: [&str; 5] = [
    "Comment “SHORTS” and I’ll DM you the notion template.",
    "Save this so you can rebuild the workflow tonight.",
    "DM this clip to your accountability partner and build together.",
    "Drop a ⚡ if you want the automation checklist.",
    "Screenshot the final shot—this is your content sprint board.",
];

/// A time-of-day posting slot and why it works
#[derive(Debug, Clone, Copy)]
pub struct ReleaseWindow {
    pub label: &'static str,
    pub reason: &'static str,
}

pub const RELEASE_WINDOWS: [ReleaseWindow; 3] = [
    ReleaseWindow {
        label: "12:05 PM PST",
        reason: "Lunch scroll spike for US west coast.",
    },
    ReleaseWindow {
        label: "3:40 PM EST",
        reason: "Post-school short-form binge window.",
    },
    ReleaseWindow {
        label: "8:10 PM EST",
        reason: "Prime couch scroll with high session times.",
    },
];

pub const OWNER_ROLES: [&str; 4] = ["You", "Editor", "Automation Bot", "Community Manager"];

/// Overlays in segment order
pub const SHOT_OVERLAYS: [&str; 4] = [
    "Caption: “Hook them in 2.7s”",
    "Overlay timer countdown",
    "Retention chart pops in",
    "CTA banner + subscribe sticker",
];

/// Used for any position past the end of [`SHOT_OVERLAYS`]
pub const FALLBACK_OVERLAY: &str = "Sticker: “watch again”";

/// Window label used in task notes when there is no schedule
pub const FALLBACK_WINDOW: &str = "prime time";
