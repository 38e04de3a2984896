//! Production task board

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::catalog::{FALLBACK_WINDOW, OWNER_ROLES};
use crate::clock::Clock;
use crate::random::RandomSource;
use crate::types::{
    AutomationTask, ReleasePlan, ScriptPlan, Stage, TaskColumn, TaskType, VideoIdea,
};

/// Resolves due dates relative to a release, falling back to "now".
struct DueDates<'a> {
    releases: HashMap<&'a str, &'a ReleasePlan>,
    now: DateTime<Utc>,
}

impl<'a> DueDates<'a> {
    fn new(schedule: &'a [ReleasePlan], now: DateTime<Utc>) -> Self {
        Self {
            releases: schedule.iter().map(|r| (r.id.as_str(), r)).collect(),
            now,
        }
    }

    /// `days_before_publish` days ahead of the release; negative means after.
    fn before(&self, days_before_publish: i64, release_id: &str) -> DateTime<Utc> {
        match self.releases.get(release_id) {
            Some(release) => release.date - Duration::days(days_before_publish),
            None => self.now,
        }
    }
}

/// Build the three-column task board for a script.
///
/// Every date hangs off the first release. With an empty schedule the lookups
/// miss and all dates collapse to the clock's "now".
pub fn build_production_tasks<R: RandomSource, C: Clock>(
    script: &ScriptPlan,
    schedule: &[ReleasePlan],
    owner: &str,
    rng: &mut R,
    clock: &C,
) -> Vec<TaskColumn> {
    let now = clock.now();
    let due = DueDates::new(schedule, now);
    let first = schedule.first();
    let first_id = first.map(|r| r.id.as_str()).unwrap_or_default();
    let [proof_owner, broll_owner, community_owner] =
        [random_role(rng), random_role(rng), random_role(rng)];

    let mut task =
        |label: &str, owner: String, due_at: DateTime<Utc>, notes: String, task_type: TaskType| {
            AutomationTask {
                id: rng.token(),
                label: label.to_string(),
                owner,
                due: due_at,
                notes,
                task_type,
            }
        };

    let columns = vec![
        TaskColumn {
            stage: Stage::PreProduction,
            items: vec![
                task(
                    "Outline final hook & promise",
                    owner.to_string(),
                    due.before(3, first_id),
                    format!(
                        "Refine messaging for “{}” and align with the {} angle.",
                        script.title, script.promise
                    ),
                    TaskType::Script,
                ),
                task(
                    "Source social proof assets",
                    proof_owner,
                    due.before(2, first_id),
                    "Pull retention charts, testimonial overlays, and before/after metrics."
                        .to_string(),
                    TaskType::Script,
                ),
            ],
        },
        TaskColumn {
            stage: Stage::Production,
            items: vec![
                task(
                    "Record hook variants",
                    owner.to_string(),
                    due.before(1, first_id),
                    "Capture 3 takes with different punch-in speeds. Keep energy above baseline."
                        .to_string(),
                    TaskType::Shoot,
                ),
                task(
                    "Layer b-roll and overlays",
                    broll_owner,
                    due.before(0, first_id),
                    "Sync automation dashboard recordings with dynamic zoom transitions."
                        .to_string(),
                    TaskType::Edit,
                ),
            ],
        },
        TaskColumn {
            stage: Stage::PostProduction,
            items: vec![
                task(
                    "Upload & schedule publish",
                    owner.to_string(),
                    first.map(|r| r.date).unwrap_or(now),
                    format!(
                        "Queue inside YouTube Studio with {} slot.",
                        first.map(|r| r.optimal_window.as_str()).unwrap_or(FALLBACK_WINDOW)
                    ),
                    TaskType::Publish,
                ),
                task(
                    "Prep community activation",
                    community_owner,
                    first.map(|r| due.before(-1, &r.id)).unwrap_or(now),
                    "Draft pinned comment, community tab teaser, and Discord prompt.".to_string(),
                    TaskType::Publish,
                ),
            ],
        },
    ];

    tracing::debug!(
        owner,
        anchored = first.is_some(),
        "Built production tasks"
    );
    columns
}

fn random_role<R: RandomSource>(rng: &mut R) -> String {
    rng.pick(&OWNER_ROLES).to_string()
}

/// Point every script task at a newly selected idea.
///
/// Only the `notes` of items tagged [`TaskType::Script`] change; every other
/// field and item is left as it was.
pub fn resync_script_notes(columns: &mut [TaskColumn], idea: &VideoIdea) {
    let mut patched = 0usize;
    for item in columns
        .iter_mut()
        .flat_map(|column| column.items.iter_mut())
        .filter(|item| item.task_type == TaskType::Script)
    {
        item.notes = format!("Craft script using idea \"{}\"", idea.title);
        patched += 1;
    }
    tracing::debug!(idea_id = %idea.id, patched, "Resynced script task notes");
}
