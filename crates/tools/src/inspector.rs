use glam::Vec2;
use stageloop_core::{Actor, ActorId, Stage};

/// Read-only queries against a stage for debugging and development UI.
pub struct StageInspector;

impl StageInspector {
    /// Counts of live and staged actors.
    pub fn summary(stage: &Stage) -> StageSummary {
        StageSummary {
            live: stage.len(),
            pending_spawns: stage.pending_spawn_count(),
            pending_destroys: stage.pending_destroy_count(),
        }
    }

    /// Details for one live actor, if present.
    pub fn inspect(stage: &Stage, id: ActorId) -> Option<ActorInfo> {
        stage.get(id).map(ActorInfo::from_actor)
    }

    /// Every live actor in dispatch order.
    pub fn list_actors(stage: &Stage) -> Vec<ActorInfo> {
        stage.actors().map(ActorInfo::from_actor).collect()
    }
}

/// Counts of live and staged actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSummary {
    pub live: usize,
    pub pending_spawns: usize,
    pub pending_destroys: usize,
}

impl std::fmt::Display for StageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stage: live={} pending_spawns={} pending_destroys={}",
            self.live, self.pending_spawns, self.pending_destroys
        )
    }
}

/// Snapshot of one actor's public state.
#[derive(Debug, Clone)]
pub struct ActorInfo {
    pub id: ActorId,
    pub sort_key: f32,
    pub position: Vec2,
}

impl ActorInfo {
    fn from_actor(actor: &dyn Actor) -> Self {
        Self {
            id: actor.id(),
            sort_key: actor.sort_key(),
            position: actor.position(),
        }
    }
}

impl std::fmt::Display for ActorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "actor [{}] key={} pos=({:.2}, {:.2})",
            self.id.short(),
            self.sort_key,
            self.position.x,
            self.position.y,
        )
    }
}
