use std::collections::BTreeMap;

use stageloop_common::ActorId;
use stageloop_input::Input;
use stageloop_render::RenderTarget;
use tracing::{trace, warn};

use crate::actor::Actor;
use crate::clock::FrameClock;

/// Live-list entry. Sort keys are immutable, so caching them here keeps
/// ordering and layer filtering off the actor storage.
#[derive(Debug, Clone, Copy)]
struct LiveEntry {
    id: ActorId,
    sort_key: f32,
}

/// The stage owns every live actor and is the only place actors are
/// created, iterated, and removed.
///
/// The live list is kept sorted by descending sort key, ties in insertion
/// order. Spawns and deferred destructions land in staging buffers and are
/// reconciled into the live list only between phase passes; a pass always
/// covers the snapshot of the live list it started with.
///
/// Actors flagged destroyed remain on the live list until reconciliation
/// but are uniformly skipped by dispatch, so hooks never need their own
/// destroyed checks.
#[derive(Default)]
pub struct Stage {
    actors: BTreeMap<ActorId, Box<dyn Actor>>,
    order: Vec<LiveEntry>,
    pending_add: Vec<Box<dyn Actor>>,
    pending_destroy: Vec<ActorId>,
    in_pass: bool,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new actor. It joins the pending-spawn buffer and becomes
    /// visible to iteration at the next reconciliation point, i.e. after
    /// the current (or next) phase pass completes.
    pub fn spawn(&mut self, actor: impl Actor + 'static) -> ActorId {
        let id = actor.id();
        self.pending_add.push(Box::new(actor));
        id
    }

    /// Number of actors on the live list, including ones flagged destroyed
    /// but not yet reconciled away.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn pending_spawn_count(&self) -> usize {
        self.pending_add.len()
    }

    pub fn pending_destroy_count(&self) -> usize {
        self.pending_destroy.len()
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn get(&self, id: ActorId) -> Option<&dyn Actor> {
        self.actors.get(&id).map(|actor| actor.as_ref())
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut dyn Actor> {
        self.actors.get_mut(&id).map(|actor| actor.as_mut())
    }

    /// Typed lookup; `None` when the id is gone or the type does not match.
    pub fn actor<T: Actor>(&self, id: ActorId) -> Option<&T> {
        self.get(id).and_then(|actor| actor.as_any().downcast_ref())
    }

    pub fn actor_mut<T: Actor>(&mut self, id: ActorId) -> Option<&mut T> {
        self.get_mut(id)
            .and_then(|actor| actor.as_any_mut().downcast_mut())
    }

    /// All live actors in dispatch order (descending sort key).
    pub fn actors(&self) -> impl Iterator<Item = &dyn Actor> + '_ {
        self.order.iter().filter_map(|entry| self.get(entry.id))
    }

    /// Lazy view of the live actors of one concrete type, in dispatch
    /// order. Excludes pending spawns and actors flagged destroyed; an
    /// empty result is an ordinary outcome, not an error. The actor
    /// currently being dispatched (if any) is not yielded.
    pub fn actors_of<T: Actor>(&self) -> impl Iterator<Item = &T> + '_ {
        self.actors()
            .filter(|actor| !actor.is_destroyed())
            .filter_map(|actor| actor.as_any().downcast_ref())
    }

    /// Mutable variant of [`Stage::actors_of`]. Iterates in id order, not
    /// dispatch order.
    pub fn actors_of_mut<T: Actor>(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.actors
            .values_mut()
            .filter(|actor| !actor.is_destroyed())
            // Deref past the box so the downcast sees the actor type.
            .filter_map(|actor| (**actor).as_any_mut().downcast_mut())
    }

    /// Flag an actor destroyed: its teardown runs now, its live-list slot
    /// survives (skipped by dispatch) until the next reconciliation.
    /// Idempotent; unknown ids are ignored.
    pub fn destroy(&mut self, id: ActorId) {
        if let Some(actor) = self.actors.get_mut(&id) {
            if actor.is_destroyed() {
                return;
            }
            actor.destroy();
            if !self.pending_destroy.contains(&id) {
                self.pending_destroy.push(id);
            }
            return;
        }
        if let Some(actor) = self.pending_add.iter_mut().find(|actor| actor.id() == id) {
            actor.destroy();
            return;
        }
        trace!(actor = %id, "destroy requested for unknown actor");
    }

    /// Destroy an actor and remove it from the live list before returning,
    /// bypassing the staging buffer. The teardown still runs first, still
    /// at most once. Use when the caller must observe the actor gone within
    /// the current pass.
    pub fn destroy_immediately(&mut self, id: ActorId) {
        if let Some(actor) = self.actors.get_mut(&id) {
            if actor.is_destroyed() {
                return;
            }
            actor.destroy_immediately();
            self.actors.remove(&id);
            self.order.retain(|entry| entry.id != id);
            return;
        }
        if let Some(index) = self.pending_add.iter().position(|actor| actor.id() == id) {
            if self.pending_add[index].is_destroyed() {
                return;
            }
            let mut actor = self.pending_add.remove(index);
            actor.destroy_immediately();
            return;
        }
        trace!(actor = %id, "immediate destroy requested for unknown actor");
    }

    /// Destroy every live actor, then reconcile. Pending spawns are not
    /// touched; they join the (now empty) live list as usual.
    pub fn destroy_all(&mut self) {
        if self.in_pass {
            warn!("destroy_all requested during a phase pass; ignoring");
            return;
        }
        let snapshot: Vec<ActorId> = self.order.iter().map(|entry| entry.id).collect();
        for id in snapshot {
            self.destroy(id);
        }
        self.reconcile();
    }

    pub fn handle_input_all(&mut self, clock: &FrameClock, input: &mut Input) {
        self.run_pass(|actor, stage| actor.handle_input(stage, clock, input));
    }

    pub fn force_update_all(&mut self, clock: &FrameClock) {
        self.run_pass(|actor, stage| actor.force_update(stage, clock));
    }

    pub fn fixed_update_all(&mut self, clock: &FrameClock) {
        self.run_pass(|actor, stage| actor.fixed_update(stage, clock));
    }

    pub fn update_all(&mut self, clock: &FrameClock) {
        self.run_pass(|actor, stage| actor.update(stage, clock));
    }

    pub fn draw_all(&mut self, target: &mut dyn RenderTarget) {
        self.draw_layer(target, None, None);
    }

    /// Draw every live actor whose sort key falls in `[layer_start,
    /// layer_end)`. A `None` bound is unbounded on that side; reversed
    /// bounds are swapped before filtering.
    pub fn draw_layer(
        &mut self,
        target: &mut dyn RenderTarget,
        layer_start: Option<f32>,
        layer_end: Option<f32>,
    ) {
        if self.in_pass {
            warn!("draw pass requested during another phase pass; ignoring");
            return;
        }
        self.in_pass = true;
        let (layer_start, layer_end) = match (layer_start, layer_end) {
            (Some(start), Some(end)) if end < start => (Some(end), Some(start)),
            bounds => bounds,
        };
        for entry in &self.order {
            if !layer_contains(entry.sort_key, layer_start, layer_end) {
                continue;
            }
            let Some(actor) = self.actors.get(&entry.id) else {
                continue;
            };
            if actor.is_destroyed() {
                continue;
            }
            actor.draw(target);
        }
        self.in_pass = false;
        self.reconcile();
    }

    /// Dispatch one mutating phase over a snapshot of the live list,
    /// descending sort key first, then reconcile.
    ///
    /// Each actor is moved out of storage for the duration of its hook so
    /// the hook can receive the rest of the stage mutably. On return the
    /// actor is re-inserted, staged for removal if it destroyed itself, or
    /// dropped if it asked for immediate removal.
    fn run_pass<F>(&mut self, mut dispatch: F)
    where
        F: FnMut(&mut dyn Actor, &mut Stage),
    {
        if self.in_pass {
            warn!("phase pass requested during another phase pass; ignoring");
            return;
        }
        self.in_pass = true;
        let snapshot: Vec<ActorId> = self.order.iter().map(|entry| entry.id).collect();
        for id in snapshot {
            // Gone since the snapshot was taken (destroyed immediately
            // earlier in this pass).
            let Some(mut actor) = self.actors.remove(&id) else {
                continue;
            };
            if actor.is_destroyed() {
                self.actors.insert(id, actor);
                continue;
            }
            dispatch(&mut *actor, self);
            if actor.base().remove_now {
                self.order.retain(|entry| entry.id != id);
                continue;
            }
            if actor.is_destroyed() && !self.pending_destroy.contains(&id) {
                self.pending_destroy.push(id);
            }
            self.actors.insert(id, actor);
        }
        self.in_pass = false;
        self.reconcile();
    }

    /// Fold the staging buffers into the live list. Runs only between
    /// passes; the sole writer of the live order apart from immediate
    /// destruction.
    fn reconcile(&mut self) {
        for actor in std::mem::take(&mut self.pending_add) {
            // Destroyed before ever going live; teardown already ran.
            if actor.is_destroyed() {
                continue;
            }
            let id = actor.id();
            let sort_key = actor.sort_key();
            // First entry strictly below the new key; equal keys are passed
            // over, which keeps insertion order among ties.
            let index = self
                .order
                .iter()
                .position(|entry| entry.sort_key < sort_key)
                .unwrap_or(self.order.len());
            self.order.insert(index, LiveEntry { id, sort_key });
            self.actors.insert(id, actor);
        }
        for id in std::mem::take(&mut self.pending_destroy) {
            if self.actors.remove(&id).is_some() {
                self.order.retain(|entry| entry.id != id);
            }
        }
    }
}

fn layer_contains(sort_key: f32, start: Option<f32>, end: Option<f32>) -> bool {
    start.is_none_or(|s| sort_key >= s) && end.is_none_or(|e| sort_key < e)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use glam::Vec2;
    use stageloop_render::NullTarget;

    use super::*;
    use crate::actor::ActorBase;

    type Log = Rc<RefCell<Vec<String>>>;

    fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    fn clock() -> FrameClock {
        FrameClock::new(1.0 / 60.0)
    }

    /// Records every hook invocation into a shared log.
    struct Probe {
        base: ActorBase,
        name: &'static str,
        log: Log,
    }

    impl Probe {
        fn new(name: &'static str, sort_key: f32, log: &Log) -> Self {
            Self {
                base: ActorBase::new(sort_key),
                name,
                log: Rc::clone(log),
            }
        }

        fn push(&self, phase: &str) {
            self.log.borrow_mut().push(format!("{phase}:{}", self.name));
        }
    }

    impl Actor for Probe {
        fn base(&self) -> &ActorBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ActorBase {
            &mut self.base
        }

        fn on_destroy(&mut self) {
            self.push("destroy");
        }

        fn handle_input(&mut self, _stage: &mut Stage, _clock: &FrameClock, _input: &mut Input) {
            self.push("input");
        }

        fn force_update(&mut self, _stage: &mut Stage, _clock: &FrameClock) {
            self.push("force");
        }

        fn fixed_update(&mut self, _stage: &mut Stage, _clock: &FrameClock) {
            self.push("fixed");
        }

        fn update(&mut self, _stage: &mut Stage, _clock: &FrameClock) {
            self.push("update");
        }

        fn draw(&self, _target: &mut dyn RenderTarget) {
            self.push("draw");
        }
    }

    /// Spawns a child probe from inside the input phase, once.
    struct Spawner {
        base: ActorBase,
        log: Log,
        spawned: bool,
    }

    impl Actor for Spawner {
        fn base(&self) -> &ActorBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ActorBase {
            &mut self.base
        }

        fn handle_input(&mut self, stage: &mut Stage, _clock: &FrameClock, _input: &mut Input) {
            if !self.spawned {
                stage.spawn(Probe::new("child", 0.0, &self.log));
                self.spawned = true;
            }
        }
    }

    /// Removes its target from the stage mid-pass.
    struct Killer {
        base: ActorBase,
        log: Log,
        target: ActorId,
    }

    impl Actor for Killer {
        fn base(&self) -> &ActorBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ActorBase {
            &mut self.base
        }

        fn update(&mut self, stage: &mut Stage, _clock: &FrameClock) {
            self.log.borrow_mut().push("update:killer".into());
            stage.destroy_immediately(self.target);
        }
    }

    /// Destroys itself during its own update.
    struct SelfDestruct {
        base: ActorBase,
        log: Log,
    }

    impl Actor for SelfDestruct {
        fn base(&self) -> &ActorBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ActorBase {
            &mut self.base
        }

        fn on_destroy(&mut self) {
            self.log.borrow_mut().push("destroy:self_destruct".into());
        }

        fn update(&mut self, _stage: &mut Stage, _clock: &FrameClock) {
            self.log.borrow_mut().push("update:self_destruct".into());
            self.destroy();
        }
    }

    /// Tries to start a nested pass from inside a hook.
    struct Recurser {
        base: ActorBase,
        log: Log,
    }

    impl Actor for Recurser {
        fn base(&self) -> &ActorBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ActorBase {
            &mut self.base
        }

        fn update(&mut self, stage: &mut Stage, clock: &FrameClock) {
            self.log.borrow_mut().push("update:recurser".into());
            stage.update_all(clock);
        }
    }

    #[test]
    fn spawn_is_deferred_until_reconciliation() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Probe::new("a", 0.0, &log));

        assert_eq!(stage.len(), 0);
        assert_eq!(stage.pending_spawn_count(), 1);
        assert_eq!(stage.actors_of::<Probe>().count(), 0);

        stage.update_all(&clock());
        assert_eq!(stage.len(), 1);
        assert_eq!(stage.pending_spawn_count(), 0);
        // Not visible during the pass it was pending for.
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn order_is_descending_with_stable_ties() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Probe::new("a", 5.0, &log));
        stage.spawn(Probe::new("b", 1.0, &log));
        stage.spawn(Probe::new("c", 5.0, &log));
        stage.spawn(Probe::new("d", 3.0, &log));
        stage.update_all(&clock());

        let keys: Vec<f32> = stage.actors().map(|actor| actor.sort_key()).collect();
        assert_eq!(keys, vec![5.0, 5.0, 3.0, 1.0]);

        stage.update_all(&clock());
        assert_eq!(
            entries(&log),
            vec!["update:a", "update:c", "update:d", "update:b"]
        );
    }

    #[test]
    fn live_size_accounting_with_no_duplicates() {
        let log = new_log();
        let mut stage = Stage::new();
        let first = stage.spawn(Probe::new("a", 0.0, &log));
        stage.spawn(Probe::new("b", 1.0, &log));
        stage.spawn(Probe::new("c", 2.0, &log));
        stage.update_all(&clock());
        assert_eq!(stage.len(), 3);

        stage.spawn(Probe::new("d", 3.0, &log));
        stage.spawn(Probe::new("e", 4.0, &log));
        stage.destroy(first);
        stage.update_all(&clock());

        assert_eq!(stage.len(), 3 + 2 - 1);
        let ids: BTreeSet<ActorId> = stage.actors().map(|actor| actor.id()).collect();
        assert_eq!(ids.len(), stage.len());
    }

    #[test]
    fn destroyed_actor_is_skipped_until_reconciled_away() {
        let log = new_log();
        let mut stage = Stage::new();
        let id = stage.spawn(Probe::new("a", 0.0, &log));
        stage.update_all(&clock());

        stage.destroy(id);
        assert_eq!(stage.len(), 1);

        stage.update_all(&clock());
        assert_eq!(stage.len(), 0);
        assert!(!entries(&log).contains(&"update:a".to_string()));
    }

    #[test]
    fn double_destroy_runs_teardown_once() {
        let log = new_log();
        let mut stage = Stage::new();
        let id = stage.spawn(Probe::new("a", 0.0, &log));
        stage.update_all(&clock());

        stage.destroy(id);
        stage.destroy(id);
        stage.destroy_immediately(id);

        let teardowns = entries(&log)
            .iter()
            .filter(|line| *line == "destroy:a")
            .count();
        assert_eq!(teardowns, 1);
        // Immediate destroy after deferred destroy is a no-op; removal
        // still waits for reconciliation.
        assert_eq!(stage.len(), 1);
        stage.update_all(&clock());
        assert_eq!(stage.len(), 0);
    }

    #[test]
    fn destroy_while_pending_never_goes_live() {
        let log = new_log();
        let mut stage = Stage::new();
        let id = stage.spawn(Probe::new("a", 0.0, &log));
        stage.destroy(id);

        stage.update_all(&clock());
        assert_eq!(stage.len(), 0);
        assert_eq!(
            entries(&log)
                .iter()
                .filter(|line| *line == "destroy:a")
                .count(),
            1
        );
    }

    #[test]
    fn destroy_immediately_while_pending_removes_from_staging() {
        let log = new_log();
        let mut stage = Stage::new();
        let id = stage.spawn(Probe::new("a", 0.0, &log));
        stage.destroy_immediately(id);

        assert_eq!(stage.pending_spawn_count(), 0);
        assert_eq!(entries(&log), vec!["destroy:a"]);
        stage.update_all(&clock());
        assert_eq!(stage.len(), 0);
    }

    #[test]
    fn immediate_destroy_removes_target_before_it_is_visited() {
        let log = new_log();
        let mut stage = Stage::new();
        let victim = stage.spawn(Probe::new("victim", 1.0, &log));
        stage.spawn(Killer {
            base: ActorBase::new(10.0),
            log: Rc::clone(&log),
            target: victim,
        });
        stage.update_all(&clock());

        // Killer runs first (higher key), victim is gone before its slot
        // in the pass comes up and before reconciliation.
        stage.update_all(&clock());
        let log = entries(&log);
        assert!(log.contains(&"update:killer".to_string()));
        assert!(log.contains(&"destroy:victim".to_string()));
        assert!(!log.contains(&"update:victim".to_string()));
        assert_eq!(stage.len(), 1);
    }

    #[test]
    fn self_destruction_is_deferred_and_spares_the_rest_of_the_pass() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(SelfDestruct {
            base: ActorBase::new(5.0),
            log: Rc::clone(&log),
        });
        stage.spawn(Probe::new("bystander", 1.0, &log));
        stage.update_all(&clock());

        stage.update_all(&clock());
        let log = entries(&log);
        assert!(log.contains(&"update:self_destruct".to_string()));
        assert!(log.contains(&"destroy:self_destruct".to_string()));
        // Lower-key actor still visited in the same pass.
        assert!(log.contains(&"update:bystander".to_string()));
        assert_eq!(stage.len(), 1);
    }

    #[test]
    fn actor_spawned_during_input_joins_the_next_phase_same_frame() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Spawner {
            base: ActorBase::new(1.0),
            log: Rc::clone(&log),
            spawned: false,
        });
        stage.update_all(&clock());

        let mut input = Input::new();
        stage.handle_input_all(&clock(), &mut input);
        assert!(!entries(&log).contains(&"input:child".to_string()));

        stage.force_update_all(&clock());
        assert!(entries(&log).contains(&"force:child".to_string()));
    }

    #[test]
    fn actors_of_sees_only_live_matching_actors() {
        let log = new_log();
        let mut stage = Stage::new();
        let doomed = stage.spawn(Probe::new("doomed", 2.0, &log));
        stage.spawn(Probe::new("kept", 1.0, &log));
        stage.spawn(Spawner {
            base: ActorBase::new(0.0),
            log: Rc::clone(&log),
            spawned: true,
        });
        stage.update_all(&clock());

        assert_eq!(stage.actors_of::<Probe>().count(), 2);
        assert_eq!(stage.actors_of::<Spawner>().count(), 1);
        assert_eq!(stage.actors_of::<Killer>().count(), 0);

        stage.destroy(doomed);
        assert_eq!(stage.actors_of::<Probe>().count(), 1);

        // Pending spawns stay invisible.
        stage.spawn(Probe::new("late", 3.0, &log));
        assert_eq!(stage.actors_of::<Probe>().count(), 1);
    }

    #[test]
    fn actors_of_mut_allows_in_place_edits() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Probe::new("a", 0.0, &log));
        stage.spawn(Probe::new("b", 1.0, &log));
        stage.update_all(&clock());

        let mut touched = 0;
        for probe in stage.actors_of_mut::<Probe>() {
            probe.set_position(Vec2::splat(7.0));
            touched += 1;
        }
        assert_eq!(touched, 2);
        assert!(
            stage
                .actors_of::<Probe>()
                .all(|probe| probe.position() == Vec2::splat(7.0))
        );
    }

    #[test]
    fn typed_lookup_checks_the_type() {
        let log = new_log();
        let mut stage = Stage::new();
        let id = stage.spawn(Probe::new("a", 0.0, &log));
        stage.update_all(&clock());

        assert!(stage.actor::<Probe>(id).is_some());
        assert!(stage.actor::<Killer>(id).is_none());
        assert!(stage.actor_mut::<Probe>(id).is_some());
    }

    #[test]
    fn draw_layer_uses_half_open_bounds() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Probe::new("ten", 10.0, &log));
        stage.spawn(Probe::new("zero", 0.0, &log));
        stage.spawn(Probe::new("five", 5.0, &log));
        stage.update_all(&clock());

        let keys: Vec<f32> = stage.actors().map(|actor| actor.sort_key()).collect();
        assert_eq!(keys, vec![10.0, 5.0, 0.0]);

        let mut target = NullTarget;
        stage.draw_layer(&mut target, Some(1.0), Some(6.0));
        assert_eq!(entries(&log), vec!["draw:five"]);

        log.borrow_mut().clear();
        stage.draw_layer(&mut target, Some(0.0), Some(10.0));
        assert_eq!(entries(&log), vec!["draw:five", "draw:zero"]);
    }

    #[test]
    fn draw_layer_swaps_reversed_bounds() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Probe::new("five", 5.0, &log));
        stage.spawn(Probe::new("ten", 10.0, &log));
        stage.update_all(&clock());

        let mut target = NullTarget;
        stage.draw_layer(&mut target, Some(6.0), Some(1.0));
        assert_eq!(entries(&log), vec!["draw:five"]);
    }

    #[test]
    fn draw_layer_supports_unbounded_sides() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Probe::new("ten", 10.0, &log));
        stage.spawn(Probe::new("zero", 0.0, &log));
        stage.spawn(Probe::new("five", 5.0, &log));
        stage.update_all(&clock());

        let mut target = NullTarget;
        stage.draw_layer(&mut target, Some(5.0), None);
        assert_eq!(entries(&log), vec!["draw:ten", "draw:five"]);

        log.borrow_mut().clear();
        stage.draw_all(&mut target);
        assert_eq!(entries(&log), vec!["draw:ten", "draw:five", "draw:zero"]);
    }

    #[test]
    fn nested_pass_attempts_are_ignored() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Recurser {
            base: ActorBase::new(0.0),
            log: Rc::clone(&log),
        });
        stage.update_all(&clock());

        stage.update_all(&clock());
        assert_eq!(entries(&log), vec!["update:recurser"]);
    }

    #[test]
    fn destroy_unknown_id_is_a_no_op() {
        let mut stage = Stage::new();
        stage.destroy(ActorId::new());
        stage.destroy_immediately(ActorId::new());
        assert_eq!(stage.len(), 0);
    }

    #[test]
    fn destroy_all_tears_down_everything() {
        let log = new_log();
        let mut stage = Stage::new();
        stage.spawn(Probe::new("a", 0.0, &log));
        stage.spawn(Probe::new("b", 1.0, &log));
        stage.spawn(Probe::new("c", 2.0, &log));
        stage.update_all(&clock());

        stage.destroy_all();
        assert_eq!(stage.len(), 0);
        assert_eq!(
            entries(&log)
                .iter()
                .filter(|line| line.starts_with("destroy:"))
                .count(),
            3
        );
    }
}
