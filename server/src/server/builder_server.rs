use std::{collections::HashSet, mem};

use log::{debug, error, warn};

use wedit_shared::{PlayerKey, Tick, TickingAreaId, TickingAreas, WorldMutType, WorldRefType};

use crate::{
    cleanup::TickingAreaCleanup,
    events::BuilderEvents,
    reconciliation::Reconciler,
    server::{ScheduledTask, TaskQueue},
    BuilderRegistry, ServerConfig, SessionStore, Sessions, WeditServerError,
};

/// Tracks which players are active builders for the lifetime of one world
/// load.
///
/// The host forwards its lifecycle notifications to the matching methods:
/// [`world_initialize`](Self::world_initialize), [`ready`](Self::ready),
/// [`player_loaded`](Self::player_loaded), [`player_leave`](Self::player_leave)
/// and [`tick`](Self::tick), the last one on every world tick. Everything that
/// happened is then available through [`take_events`](Self::take_events).
pub struct BuilderServer {
    config: ServerConfig,
    // Lifecycle
    initialized: bool,
    ready: bool,
    current_tick: Tick,
    tasks: TaskQueue,
    // Builders
    registry: BuilderRegistry,
    sessions: Box<dyn SessionStore>,
    denied: HashSet<PlayerKey>,
    // Events
    incoming_events: BuilderEvents,
}

impl BuilderServer {
    /// Create a new BuilderServer that keeps its sessions in memory
    pub fn new(config: ServerConfig) -> Self {
        Self::with_session_store(config, Box::new(Sessions::new()))
    }

    /// Create a new BuilderServer backed by the given session store
    pub fn with_session_store(config: ServerConfig, sessions: Box<dyn SessionStore>) -> Self {
        Self {
            config,
            initialized: false,
            ready: false,
            current_tick: 0,
            tasks: TaskQueue::new(),
            registry: BuilderRegistry::new(),
            sessions,
            denied: HashSet::new(),
            incoming_events: BuilderEvents::new(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns whether the world has finished loading
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    // Lifecycle

    /// Handles the host's world-initialize notification.
    ///
    /// Registers the ticking area property and schedules the cleanup of areas
    /// left over from the previous load for the next safe execution slot. The
    /// property registry is still being configured while this runs, so the
    /// cleanup never happens inline. Only the first call per world load has
    /// any effect.
    pub fn world_initialize<W: WorldMutType>(&mut self, world: &mut W) {
        if self.initialized {
            warn!("world initialize received twice in one load, ignoring");
            return;
        }
        self.initialized = true;

        if let Err(err) = world.register_string_property(
            &self.config.ticking_area_property,
            self.config.ticking_area_property_max_length,
        ) {
            error!("failed to initialize world properties: {}", err);
            self.incoming_events.push_error(err.into());
            return;
        }
        debug!("Initialized dynamic properties");

        self.tasks.schedule(ScheduledTask::CleanupTickingAreas(
            TickingAreaCleanup::new(&self.config),
        ));
    }

    /// Handles the host's ready notification. `load_time` is in ticks.
    pub fn ready(&mut self, load_time: u32) {
        debug!("World has been loaded in {} ticks!", load_time);
        self.ready = true;
    }

    /// Handles a player finishing loading into the world. Admits them straight
    /// away if the world is ready and they hold a permission tag.
    pub fn player_loaded<W: WorldMutType>(&mut self, world: &mut W, player: &PlayerKey) {
        let Ok(name) = world.player_name(player) else {
            debug!("loaded player {:?} vanished before it could be seen", player);
            return;
        };
        debug!("player {} loaded.", name);

        if !self.ready {
            return;
        }

        let mut reconciler = self.reconciler();
        if let Ok(true) = reconciler.is_eligible(&*world, player) {
            reconciler.promote(player, &name);
        }
    }

    /// Handles a player leaving. Every builder entry under their name is
    /// removed and their session is closed.
    pub fn player_leave<W: WorldRefType>(&mut self, world: &W, name: &str) {
        debug!("player {} left.", name);
        let removed = self.reconciler().demote(world, name);
        self.incoming_events.push_leave(name, removed);
    }

    /// Must be called once per world tick. Runs any deferred work, then, once
    /// the world is ready, brings the builder set in line with the players'
    /// current tags.
    pub fn tick<W: WorldMutType>(&mut self, world: &mut W) {
        self.current_tick = self.current_tick.wrapping_add(1);

        self.run_scheduled(world);

        if !self.ready {
            return;
        }

        self.reconciler().reconcile(world);
    }

    /// Runs the work deferred by earlier notifications
    pub fn run_scheduled<W: WorldMutType>(&mut self, world: &mut W) {
        for task in self.tasks.take_all() {
            match task {
                ScheduledTask::CleanupTickingAreas(cleanup) => match cleanup.run(world) {
                    Ok(report) => self.incoming_events.push_cleanup(report),
                    Err(err) => {
                        error!("ticking area cleanup failed: {}", err);
                        self.incoming_events.push_error(err);
                    }
                },
            }
        }
    }

    pub fn has_scheduled_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Tears down all state held for the current world load
    pub fn reset_all(&mut self) {
        self.initialized = false;
        self.ready = false;
        self.current_tick = 0;
        self.tasks.clear();
        self.registry.clear();
        self.sessions.clear();
        self.denied.clear();
        self.incoming_events = BuilderEvents::new();
    }

    /// Returns every event recorded since the last call
    pub fn take_events(&mut self) -> BuilderEvents {
        mem::replace(&mut self.incoming_events, BuilderEvents::new())
    }

    // Builders

    pub fn is_builder(&self, player: &PlayerKey) -> bool {
        self.registry.is_active(player)
    }

    pub fn builder_keys(&self) -> Vec<PlayerKey> {
        self.registry.keys().copied().collect()
    }

    pub fn builders_count(&self) -> usize {
        self.registry.len()
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    // Ticking Areas

    /// Records a newly created ticking area in the world property so that it
    /// is reclaimed if the world shuts down before it is released.
    ///
    /// A cleanup still pending from [`world_initialize`](Self::world_initialize)
    /// runs first, so it only ever sees areas left by the previous load.
    pub fn register_ticking_area<W: WorldMutType>(
        &mut self,
        world: &mut W,
        id: TickingAreaId,
    ) -> Result<(), WeditServerError> {
        self.run_scheduled(world);
        let mut areas = self.stored_ticking_areas(&*world)?;
        areas.insert(id)?;
        self.store_ticking_areas(world, &areas)
    }

    /// Forgets a ticking area that has been removed normally. Returns false if
    /// it was not recorded.
    pub fn release_ticking_area<W: WorldMutType>(
        &mut self,
        world: &mut W,
        id: &TickingAreaId,
    ) -> Result<bool, WeditServerError> {
        self.run_scheduled(world);
        let mut areas = self.stored_ticking_areas(&*world)?;
        if !areas.remove(id) {
            return Ok(false);
        }
        self.store_ticking_areas(world, &areas)?;
        Ok(true)
    }

    pub fn stored_ticking_areas<W: WorldRefType>(
        &self,
        world: &W,
    ) -> Result<TickingAreas, WeditServerError> {
        let raw = world.dynamic_property(&self.config.ticking_area_property)?;
        Ok(TickingAreas::from_property(raw.as_deref())?)
    }

    // Private

    fn store_ticking_areas<W: WorldMutType>(
        &self,
        world: &mut W,
        areas: &TickingAreas,
    ) -> Result<(), WeditServerError> {
        let raw = areas.to_property(self.config.ticking_area_property_max_length)?;
        world.set_dynamic_property(&self.config.ticking_area_property, &raw)?;
        Ok(())
    }

    fn reconciler(&mut self) -> Reconciler<'_> {
        Reconciler {
            config: &self.config,
            tick: self.current_tick,
            registry: &mut self.registry,
            sessions: self.sessions.as_mut(),
            denied: &mut self.denied,
            events: &mut self.incoming_events,
        }
    }
}
