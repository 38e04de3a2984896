//! Export of the aggregate plan.
//!
//! JSON is the only artifact format; field names follow the plan types.
//! The markdown brief is a human-readable rendering of the same plan.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::{format_hashtags, format_release_date, format_seconds};
use crate::types::AutomationPlan;

/// File name for a channel's export, e.g. `daily-shorts-lab-shorts-automation.json`.
pub fn export_file_name(channel_name: &str) -> String {
    format!(
        "{}-shorts-automation.json",
        channel_name.to_lowercase().replace(' ', "-")
    )
}

/// Pretty-printed JSON for a plan.
pub fn to_json(plan: &AutomationPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Write the plan's JSON export into `dir`, returning the file path.
pub fn write_plan(plan: &AutomationPlan, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(&plan.profile.channel_name));
    std::fs::write(&path, to_json(plan)?)?;
    tracing::info!(path = %path.display(), "Exported plan");
    Ok(path)
}

/// Render a plan as a markdown production brief.
pub fn render_markdown(plan: &AutomationPlan) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_markdown(&mut out, plan);
    out
}

fn write_markdown(out: &mut impl Write, plan: &AutomationPlan) -> std::fmt::Result {
    let profile = &plan.profile;
    let script = &plan.script;

    writeln!(out, "# {}: {}", profile.channel_name, script.title)?;
    writeln!(out)?;
    writeln!(out, "| Field | Value |")?;
    writeln!(out, "|-------|-------|")?;
    writeln!(out, "| Niche | {} |", profile.niche)?;
    writeln!(out, "| Audience | {} |", profile.audience)?;
    writeln!(out, "| Tone | {} |", profile.tone)?;
    writeln!(out, "| Cadence | {} |", profile.cadence)?;
    writeln!(out, "| Goal | {} |", profile.goal)?;
    writeln!(out, "| Framework | {} |", plan.idea.framework)?;
    writeln!(out, "| Trend | {} |", plan.idea.trend_pairing)?;
    writeln!(out, "| Score | {} |", plan.idea.potential_score)?;
    writeln!(out)?;

    writeln!(out, "## Script")?;
    writeln!(out)?;
    writeln!(out, "*{}*", script.promise)?;
    writeln!(out)?;
    for segment in &script.segments {
        writeln!(
            out,
            "- **{}** ({}, {} pace): {}",
            segment.label,
            format_seconds(segment.duration),
            segment.pace,
            segment.content
        )?;
    }
    writeln!(out)?;
    writeln!(out, "CTA: {}", script.call_to_action)?;
    writeln!(out)?;

    writeln!(out, "## Shot list")?;
    writeln!(out)?;
    for (i, shot) in plan.shotlist.iter().enumerate() {
        writeln!(
            out,
            "{}. **{}** ({}) {}",
            i + 1,
            shot.category,
            format_seconds(shot.duration),
            shot.headline
        )?;
        writeln!(out, "   - {}", shot.direction)?;
        writeln!(out, "   - Overlay: {}", shot.overlay)?;
    }
    writeln!(out)?;

    writeln!(out, "## Schedule")?;
    writeln!(out)?;
    writeln!(out, "| Date | Window | Title | Tags |")?;
    writeln!(out, "|------|--------|-------|------|")?;
    for release in &plan.schedule {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            format_release_date(release.date),
            release.optimal_window,
            release.title,
            format_hashtags(&release.hashtags)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Tasks")?;
    for column in &plan.tasks {
        writeln!(out)?;
        writeln!(out, "### {}", column.stage)?;
        writeln!(out)?;
        for task in &column.items {
            writeln!(
                out,
                "- [ ] {} ({}, due {}) {}",
                task.label,
                task.owner,
                format_release_date(task.due),
                task.notes
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::random::SeededRandom;
    use crate::types::ChannelProfile;
    use crate::PlanSession;
    use chrono::{TimeZone, Utc};

    fn plan() -> AutomationPlan {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let mut session =
            PlanSession::new(ChannelProfile::default(), SeededRandom::new(99), FixedClock(now));
        session.launch();
        session.plan().expect("plan after launch")
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("Daily Shorts Lab"),
            "daily-shorts-lab-shorts-automation.json"
        );
        assert_eq!(export_file_name(""), "-shorts-automation.json");
    }

    #[test]
    fn test_json_uses_plan_field_names() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&plan()).unwrap()).unwrap();

        for key in ["profile", "idea", "script", "shotlist", "schedule", "tasks"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["idea"]["potentialScore"].is_u64());
        assert!(json["script"]["ideaId"].is_string());
        assert_eq!(json["script"]["segments"][0]["label"], "HOOK");
        assert!(json["schedule"][0]["optimalWindow"].is_string());
        assert_eq!(json["tasks"][0]["items"][0]["type"], "script");
    }

    #[test]
    fn test_json_round_trips() {
        let plan = plan();
        let back: AutomationPlan = serde_json::from_str(&to_json(&plan).unwrap()).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_write_plan() {
        let dir = tempfile::tempdir().unwrap();
        let plan = plan();
        let path = write_plan(&plan, &dir.path().join("out")).unwrap();

        assert!(path.ends_with("daily-shorts-lab-shorts-automation.json"));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("\"channelName\": \"Daily Shorts Lab\""));
    }

    #[test]
    fn test_render_markdown() {
        let plan = plan();
        let md = render_markdown(&plan);

        assert!(md.starts_with("# Daily Shorts Lab: "));
        assert!(md.contains("## Shot list"));
        assert!(md.contains("### Pre-production"));
        assert!(md.contains("### Post-production"));
        assert!(md.contains("**HOOK** (6s, fast pace)"));
        assert!(md.contains(&plan.schedule[0].optimal_window));
    }
}
