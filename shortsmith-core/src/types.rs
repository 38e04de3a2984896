//! Core domain types for shortsmith
//!
//! These types are the records that flow through the planning pipeline.
//! Serialized field names match the exported plan format (camelCase).
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Profile** | Channel configuration supplied by the caller |
//! | **Idea** | One generated video concept, scored and paired with a trend |
//! | **Script** | A four-segment, paced outline for one idea |
//! | **Shot** | A camera/editing instruction derived from one script segment |
//! | **Release** | A dated publishing slot for one idea |
//! | **Task** | A production to-do anchored to the first release |
//! | **Plan** | The aggregate of all of the above for the selected idea |
//!
//! Scripts reference their idea by id only. An id that no longer resolves
//! (for example after a new launch) is a legitimate state, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Channel Profile
// ============================================

/// Channel configuration. Read-only input to every generator.
///
/// `tone`, `cadence` and `goal` are descriptive only; no generator reads them.
/// In particular the release spacing does not follow `cadence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelProfile {
    pub channel_name: String,
    pub niche: String,
    pub audience: String,
    pub tone: String,
    pub keywords: Vec<String>,
    pub cadence: String,
    pub goal: String,
}

impl Default for ChannelProfile {
    fn default() -> Self {
        Self {
            channel_name: "Daily Shorts Lab".to_string(),
            niche: "AI tools for solo creators".to_string(),
            audience: "ambitious solo creators who want to grow with short-form video".to_string(),
            tone: "fast-paced, hype, but still practical".to_string(),
            keywords: vec![
                "AI workflow".to_string(),
                "content strategy".to_string(),
                "viral hooks".to_string(),
            ],
            cadence: "3 shorts per week".to_string(),
            goal: "reach 50k subscribers in 90 days by shipping consistently".to_string(),
        }
    }
}

impl ChannelProfile {
    /// Keywords the generators draw from. An empty list means `[niche]`.
    pub fn effective_keywords(&self) -> Vec<String> {
        if self.keywords.is_empty() {
            vec![self.niche.clone()]
        } else {
            self.keywords.clone()
        }
    }

    /// First word of the niche, or "Creators" when the niche is blank.
    pub fn niche_head(&self) -> &str {
        self.niche.split_whitespace().next().unwrap_or("Creators")
    }
}

/// Parse a comma-separated keyword field ("a, b,, c") into a clean list.
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

// ============================================
// Ideas
// ============================================

/// A generated video idea. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoIdea {
    pub id: String,
    pub title: String,
    pub hook: String,
    pub framework: String,
    pub trend_pairing: String,
    /// Always in `78..=99`
    pub potential_score: u32,
}

// ============================================
// Script
// ============================================

/// Role of a script segment, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentRole {
    Hook,
    Payoff,
    Proof,
    Cta,
}

impl SegmentRole {
    /// All roles in playback order
    pub const ALL: [SegmentRole; 4] = [
        SegmentRole::Hook,
        SegmentRole::Payoff,
        SegmentRole::Proof,
        SegmentRole::Cta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentRole::Hook => "HOOK",
            SegmentRole::Payoff => "PAYOFF",
            SegmentRole::Proof => "PROOF",
            SegmentRole::Cta => "CTA",
        }
    }

    /// Fixed segment length in seconds
    pub fn duration(&self) -> u32 {
        match self {
            SegmentRole::Hook => 6,
            SegmentRole::Payoff => 18,
            SegmentRole::Proof => 22,
            SegmentRole::Cta => 12,
        }
    }

    /// Fixed pacing for the segment
    pub fn pace(&self) -> Pace {
        match self {
            SegmentRole::Hook => Pace::Fast,
            SegmentRole::Payoff => Pace::Dynamic,
            SegmentRole::Proof => Pace::Punchy,
            SegmentRole::Cta => Pace::Fast,
        }
    }

    /// Shot category a segment of this role turns into
    pub fn shot_category(&self) -> ShotCategory {
        match self {
            SegmentRole::Hook => ShotCategory::Hook,
            SegmentRole::Payoff => ShotCategory::ValueHit,
            SegmentRole::Proof => ShotCategory::SocialProof,
            SegmentRole::Cta => ShotCategory::CallToAction,
        }
    }
}

impl std::fmt::Display for SegmentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Fast,
    Dynamic,
    Punchy,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Fast => "fast",
            Pace::Dynamic => "dynamic",
            Pace::Punchy => "punchy",
        }
    }
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One timed segment of a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub label: SegmentRole,
    /// Seconds
    pub duration: u32,
    pub pace: Pace,
    pub content: String,
}

/// A paced script for one idea.
///
/// `segments` always holds one segment per [`SegmentRole`], in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptPlan {
    /// Non-owning back-reference to [`VideoIdea::id`]
    pub idea_id: String,
    pub title: String,
    pub promise: String,
    pub segments: Vec<ScriptSegment>,
    pub call_to_action: String,
}

impl ScriptPlan {
    /// Total runtime in seconds
    pub fn total_duration(&self) -> u32 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Resolve the source idea in `ideas`, if it is still there.
    pub fn source_idea<'a>(&self, ideas: &'a [VideoIdea]) -> Option<&'a VideoIdea> {
        ideas.iter().find(|idea| idea.id == self.idea_id)
    }
}

// ============================================
// Shots
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotCategory {
    Hook,
    #[serde(rename = "Value Hit")]
    ValueHit,
    #[serde(rename = "Social Proof")]
    SocialProof,
    #[serde(rename = "Call to Action")]
    CallToAction,
}

impl ShotCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotCategory::Hook => "Hook",
            ShotCategory::ValueHit => "Value Hit",
            ShotCategory::SocialProof => "Social Proof",
            ShotCategory::CallToAction => "Call to Action",
        }
    }
}

impl std::fmt::Display for ShotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One shot, index-aligned with the script segment it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotPlan {
    pub id: String,
    pub headline: String,
    pub direction: String,
    pub category: ShotCategory,
    pub overlay: String,
    /// Seconds, copied from the segment
    pub duration: u32,
}

// ============================================
// Schedule
// ============================================

/// A dated publishing slot for one idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasePlan {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub optimal_window: String,
    pub cta: String,
    /// Always exactly three entries
    pub hashtags: Vec<String>,
    pub reasoning: String,
}

// ============================================
// Tasks
// ============================================

/// Task tag used for downstream filtering only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Script,
    Shoot,
    Edit,
    Publish,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Script => "script",
            TaskType::Shoot => "shoot",
            TaskType::Edit => "edit",
            TaskType::Publish => "publish",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationTask {
    pub id: String,
    pub label: String,
    pub owner: String,
    pub due: DateTime<Utc>,
    pub notes: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
}

/// Production stage. Columns always appear in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Pre-production")]
    PreProduction,
    Production,
    #[serde(rename = "Post-production")]
    PostProduction,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::PreProduction, Stage::Production, Stage::PostProduction];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::PreProduction => "Pre-production",
            Stage::Production => "Production",
            Stage::PostProduction => "Post-production",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskColumn {
    pub stage: Stage,
    pub items: Vec<AutomationTask>,
}

impl TaskColumn {
    pub fn items_of_type(&self, task_type: TaskType) -> impl Iterator<Item = &AutomationTask> {
        self.items.iter().filter(move |t| t.task_type == task_type)
    }
}

// ============================================
// Aggregate
// ============================================

/// Everything generated for the selected idea. This is the export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationPlan {
    pub profile: ChannelProfile,
    pub idea: VideoIdea,
    pub script: ScriptPlan,
    pub shotlist: Vec<ShotPlan>,
    pub schedule: Vec<ReleasePlan>,
    pub tasks: Vec<TaskColumn>,
}
