//! Planning session: holds the latest pipeline outputs for one caller.
//!
//! A launch recomputes everything. Re-selecting an idea is the one partial
//! update: script and shotlist are rebuilt, the idea batch and schedule stay,
//! and only script-task notes are patched.

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::types::{
    AutomationPlan, ChannelProfile, ReleasePlan, ScriptPlan, ShotPlan, TaskColumn, VideoIdea,
};

use super::{
    build_production_tasks, build_script, create_publishing_schedule, create_shotlist,
    generate_ideas, resync_script_notes,
};

pub struct PlanSession<R, C> {
    profile: ChannelProfile,
    owner: Option<String>,
    rng: R,
    clock: C,
    ideas: Vec<VideoIdea>,
    selected: Option<VideoIdea>,
    script: Option<ScriptPlan>,
    shotlist: Vec<ShotPlan>,
    schedule: Vec<ReleasePlan>,
    tasks: Vec<TaskColumn>,
}

impl<R: RandomSource, C: Clock> PlanSession<R, C> {
    pub fn new(profile: ChannelProfile, rng: R, clock: C) -> Self {
        Self {
            profile,
            owner: None,
            rng,
            clock,
            ideas: Vec::new(),
            selected: None,
            script: None,
            shotlist: Vec::new(),
            schedule: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Assign owned tasks to someone other than the channel.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn profile(&self) -> &ChannelProfile {
        &self.profile
    }

    /// Replace the profile. Outputs are untouched until the next launch or
    /// selection.
    pub fn set_profile(&mut self, profile: ChannelProfile) {
        self.profile = profile;
    }

    /// Owner of the non-delegated tasks
    pub fn owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(&self.profile.channel_name)
    }

    /// Run the whole pipeline and select the first idea.
    pub fn launch(&mut self) {
        let ideas = generate_ideas(&self.profile, &mut self.rng);
        let schedule =
            create_publishing_schedule(&ideas, &self.profile, &mut self.rng, &self.clock);

        let Some(primary) = ideas.first().cloned() else {
            // The batch size is fixed, but never publish a half-built plan.
            self.clear();
            return;
        };

        let script = build_script(&primary, &self.profile, &mut self.rng);
        let shotlist = create_shotlist(&script, &mut self.rng);
        let owner = self.owner().to_string();
        let tasks = build_production_tasks(&script, &schedule, &owner, &mut self.rng, &self.clock);

        tracing::info!(
            channel = %self.profile.channel_name,
            ideas = ideas.len(),
            releases = schedule.len(),
            selected = %primary.id,
            "Launched planning run"
        );

        self.ideas = ideas;
        self.selected = Some(primary);
        self.script = Some(script);
        self.shotlist = shotlist;
        self.schedule = schedule;
        self.tasks = tasks;
    }

    /// Switch the selected idea by id.
    ///
    /// Rebuilds script and shotlist, keeps ideas and schedule, and patches the
    /// notes of script tasks. An unknown id leaves the session unchanged.
    pub fn select_idea(&mut self, idea_id: &str) -> Result<()> {
        if self.ideas.is_empty() {
            return Err(Error::NothingGenerated);
        }
        let idea = self
            .ideas
            .iter()
            .find(|idea| idea.id == idea_id)
            .cloned()
            .ok_or_else(|| Error::IdeaNotFound(idea_id.to_string()))?;

        let script = build_script(&idea, &self.profile, &mut self.rng);
        self.shotlist = create_shotlist(&script, &mut self.rng);
        self.script = Some(script);
        resync_script_notes(&mut self.tasks, &idea);

        tracing::info!(idea_id = %idea.id, title = %idea.title, "Selected idea");
        self.selected = Some(idea);
        Ok(())
    }

    /// Switch the selected idea by its 0-based position in the batch.
    pub fn select_idea_at(&mut self, index: usize) -> Result<()> {
        if self.ideas.is_empty() {
            return Err(Error::NothingGenerated);
        }
        let id = self
            .ideas
            .get(index)
            .map(|idea| idea.id.clone())
            .ok_or_else(|| Error::IdeaNotFound(format!("#{}", index + 1)))?;
        self.select_idea(&id)
    }

    pub fn ideas(&self) -> &[VideoIdea] {
        &self.ideas
    }

    pub fn selected_idea(&self) -> Option<&VideoIdea> {
        self.selected.as_ref()
    }

    pub fn script(&self) -> Option<&ScriptPlan> {
        self.script.as_ref()
    }

    pub fn shotlist(&self) -> &[ShotPlan] {
        &self.shotlist
    }

    pub fn schedule(&self) -> &[ReleasePlan] {
        &self.schedule
    }

    pub fn tasks(&self) -> &[TaskColumn] {
        &self.tasks
    }

    /// The aggregate plan, present only once every stage has output.
    pub fn plan(&self) -> Option<AutomationPlan> {
        let idea = self.selected.clone()?;
        let script = self.script.clone()?;
        if self.shotlist.is_empty() || self.schedule.is_empty() || self.tasks.is_empty() {
            return None;
        }
        Some(AutomationPlan {
            profile: self.profile.clone(),
            idea,
            script,
            shotlist: self.shotlist.clone(),
            schedule: self.schedule.clone(),
            tasks: self.tasks.clone(),
        })
    }

    fn clear(&mut self) {
        self.ideas.clear();
        self.selected = None;
        self.script = None;
        self.shotlist.clear();
        self.schedule.clear();
        self.tasks.clear();
    }
}
