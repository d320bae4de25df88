//! Firefighter behavior.
//!
//! A firefighter takes at most one action per tick, chosen by priority:
//!
//! 1. **Refill**: with an empty tank it heads to its base and refills on
//!    arrival (full, instantaneous, only on the exact base cell).
//! 2. **Assigned work**: the first assigned contract (creation order):
//!    approach the closest burning cluster cell, extinguish once within
//!    `sensor_range`.
//! 3. **Local fire**: after bidding on open contracts, fight the closest
//!    burning tree inside `sensor_range`.
//! 4. **Explore**: walk towards a random point, keeping it until reached.
//!
//! Before any of that, contracts it is assigned to whose clusters have
//! stopped burning are closed.  Closing is bookkeeping, not an action, so it
//! also happens on an empty tank.

use ff_contract::{Bid, ContractStatus};
use ff_core::{AgentRef, AgentRng, Cell, ContractEvent, ContractId, FireConfig, FirefighterId, SimEvent};

use crate::{FieldAgent, StepContext, move_towards, nearest};

/// An extinguish action in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Extinguishing {
    pub cell:      Cell,
    /// Ticks still needed before the tree is out.
    pub remaining: u32,
}

pub struct Firefighter {
    pub id:   FirefighterId,
    pub pos:  Cell,
    /// Spawn cell; the only place water can be refilled.
    pub base: Cell,
    pub water: u32,
    /// Ticks spent working an assignment or a perceived fire.
    pub active_timesteps: u64,

    extinguishing:  Option<Extinguishing>,
    explore_target: Option<Cell>,
    rng:            AgentRng,
}

impl Firefighter {
    /// A firefighter spawned at `spawn` with a full tank.
    pub fn new(id: FirefighterId, spawn: Cell, config: &FireConfig) -> Self {
        Self {
            id,
            pos: spawn,
            base: spawn,
            water: config.max_water,
            active_timesteps: 0,
            extinguishing: None,
            explore_target: None,
            rng: AgentRng::for_firefighter(config.seed, id),
        }
    }

    pub fn extinguishing(&self) -> Option<Extinguishing> {
        self.extinguishing
    }

    pub fn explore_target(&self) -> Option<Cell> {
        self.explore_target
    }

    // ── Bookkeeping ───────────────────────────────────────────────────────

    /// Complete every assigned contract with no burning cell left.
    fn close_finished_contracts(&self, ctx: &mut StepContext<'_>) {
        let forest = &*ctx.forest;
        let finished: Vec<(ContractId, Cell)> = ctx
            .contracts
            .assigned_to(self.id)
            .filter(|c| !c.cluster.iter().any(|&cell| forest.is_burning(cell)))
            .map(|c| (c.id, c.location))
            .collect();

        for (contract, location) in finished {
            match ctx.contracts.complete(contract, self.id, ctx.tick) {
                Ok(()) => ctx.log.contract(
                    ctx.tick,
                    ContractEvent::Complete { contract, firefighter: self.id, location },
                ),
                Err(err) => tracing::trace!(firefighter = %self.id, %err, "completion skipped"),
            }
        }
    }

    // ── Actions ───────────────────────────────────────────────────────────

    fn walk(&mut self, target: Cell, ctx: &StepContext<'_>) {
        self.extinguishing = None;
        self.pos = move_towards(self.pos, target, ctx.config.base_speed, ctx.grid_size());
    }

    /// Empty tank: go home, refill there.
    fn refill(&mut self, ctx: &mut StepContext<'_>) {
        self.extinguishing = None;
        if self.pos == self.base {
            self.water = ctx.config.max_water;
            tracing::trace!(firefighter = %self.id, water = self.water, "refilled");
        } else {
            let base = self.base;
            self.walk(base, ctx);
        }
    }

    /// Advance the extinguish action on `cell`, starting a new one if the
    /// firefighter was busy elsewhere.
    fn extinguish(&mut self, cell: Cell, ctx: &mut StepContext<'_>) {
        let remaining = match self.extinguishing {
            Some(job) if job.cell == cell => job.remaining,
            _ => ctx.config.extinguish_time,
        }
        .saturating_sub(1);

        if remaining > 0 {
            self.extinguishing = Some(Extinguishing { cell, remaining });
            return;
        }
        self.extinguishing = None;

        if ctx.forest.extinguish(cell) {
            self.water = self.water.saturating_sub(1);
            ctx.log.push(SimEvent::WaterSplash { tick: ctx.tick, cell });
            if ctx.config.debug_mode {
                ctx.log.push(SimEvent::Extinguished { tick: ctx.tick, firefighter: self.id, cell });
            }
        }
    }

    /// Work the first assigned contract.  `false` if there is none with a
    /// burning cell left.
    fn work_assigned(&mut self, ctx: &mut StepContext<'_>) -> bool {
        let forest = &*ctx.forest;
        let burning: Option<Vec<Cell>> = ctx.contracts.assigned_to(self.id).next().map(|c| {
            c.cluster.iter().copied().filter(|&cell| forest.is_burning(cell)).collect()
        });
        let Some(target) = burning.and_then(|cells| nearest(self.pos, &cells)) else {
            return false;
        };

        self.active_timesteps += 1;
        if self.pos.distance(target) > ctx.config.sensor_range {
            self.walk(target, ctx);
        } else {
            self.extinguish(target, ctx);
        }
        true
    }

    /// Bid on open contracts this firefighter has not bid on yet.
    ///
    /// With `exclusive_bidding` only one bid may be outstanding at a time,
    /// and it goes to the cheapest candidate.
    fn bid(&self, ctx: &mut StepContext<'_>) {
        let exclusive = ctx.config.exclusive_bidding;
        if exclusive && ctx.contracts.outstanding_bid(self.id).is_some() {
            return;
        }

        let tick = ctx.tick;
        let mut offers: Vec<(ContractId, Bid)> = ctx
            .contracts
            .by_status(ContractStatus::Open)
            .filter(|c| !c.has_bid_from(self.id))
            .map(|c| (c.id, Bid::new(self.id, self.pos, c.location, self.water, tick)))
            .collect();

        if exclusive {
            // `min_by` keeps the first of equal minima: creation order.
            offers = offers
                .into_iter()
                .min_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
                .into_iter()
                .collect();
        }

        for (contract, bid) in offers {
            let event = ContractEvent::Bid {
                contract,
                firefighter: self.id,
                bid:         bid.value,
                distance:    bid.distance,
                water:       bid.water,
            };
            match ctx.contracts.submit_bid(contract, bid) {
                Ok(()) => ctx.log.contract(ctx.tick, event),
                Err(err) => tracing::trace!(firefighter = %self.id, %err, "bid skipped"),
            }
        }
    }

    /// Fight the closest fire in sensor range.  `false` if none is visible.
    fn fight_local_fire(&mut self, ctx: &mut StepContext<'_>) -> bool {
        let fires = ctx.forest.burning_within(self.pos, ctx.config.sensor_range);
        let Some(target) = nearest(self.pos, &fires) else {
            return false;
        };
        if ctx.config.debug_mode {
            ctx.log.push(SimEvent::FireDetected { tick: ctx.tick, agent: self.agent_ref(), fires });
        }
        self.active_timesteps += 1;
        self.extinguish(target, ctx);
        true
    }

    fn explore(&mut self, ctx: &mut StepContext<'_>) {
        let target = match self.explore_target {
            Some(target) if target != self.pos => target,
            _ => {
                let size = ctx.grid_size();
                let target = Cell::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
                self.explore_target = Some(target);
                target
            }
        };
        self.walk(target, ctx);
    }
}

impl FieldAgent for Firefighter {
    fn agent_ref(&self) -> AgentRef {
        AgentRef::Firefighter(self.id)
    }

    fn position(&self) -> Cell {
        self.pos
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) {
        self.log_position(ctx);
        self.close_finished_contracts(ctx);

        if self.water == 0 {
            self.refill(ctx);
            return;
        }
        if self.work_assigned(ctx) {
            return;
        }
        self.bid(ctx);
        if self.fight_local_fire(ctx) {
            return;
        }
        self.explore(ctx);
    }
}
