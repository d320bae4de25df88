//! Drone behavior.
//!
//! Each tick a drone:
//!
//! 1. assigns every open contract it manages that is ready (at least one
//!    bid, created on an earlier tick);
//! 2. if its battery no longer covers the trip home plus the warning
//!    margin, flies to base and does nothing else;
//! 3. otherwise scans for fire, announces a contract for every visible
//!    cluster not yet covered, and flies towards the first fire it saw;
//! 4. with no fire in sight, patrols random points of its quadrant.
//!
//! The assignment pass comes before the battery check, so a drone heading
//! home still awards its ready contracts; a low battery only overrides
//! movement and perception.
//!
//! Flying costs battery equal to the Euclidean distance covered.  Battery is
//! clamped at zero; an empty drone still makes it home.

use ff_core::{AgentRef, AgentRng, Cell, ContractEvent, ContractId, DroneId, FireConfig, SimEvent};

use crate::{FieldAgent, Quadrant, StepContext, cluster_fires, move_towards, visible_fires};

pub struct Drone {
    pub id:       DroneId,
    pub pos:      Cell,
    pub quadrant: Quadrant,
    pub battery:  f64,
    /// Patrol point or, while fire is in sight, the first visible fire.
    pub target:   Cell,

    base: Cell,
    rng:  AgentRng,
}

impl Drone {
    /// A fully charged drone at `spawn`, patrolling quadrant `id % 4`.
    pub fn new(id: DroneId, spawn: Cell, config: &FireConfig) -> Self {
        let quadrant = Quadrant::for_drone(id, config.grid_size());
        let mut rng = AgentRng::for_drone(config.seed, id);
        let target = quadrant.random_cell(&mut rng);
        Self {
            id,
            pos: spawn,
            quadrant,
            battery: config.drone_max_battery,
            target,
            base: config.drone_base(),
            rng,
        }
    }

    /// The shared recharge station.
    pub fn base(&self) -> Cell {
        self.base
    }

    /// `true` once the battery only just covers the way home.
    pub fn battery_low(&self, config: &FireConfig) -> bool {
        self.battery <= self.pos.distance(self.base) + config.drone_battery_warning
    }

    fn fly_to(&mut self, target: Cell, ctx: &StepContext<'_>) {
        let next = move_towards(self.pos, target, ctx.config.drone_speed, ctx.grid_size());
        self.battery = (self.battery - self.pos.distance(next)).max(0.0);
        self.pos = next;
    }

    // ── Manager role ──────────────────────────────────────────────────────

    /// Award every ready open contract this drone manages.
    fn assign_contracts(&self, ctx: &mut StepContext<'_>) {
        let ready: Vec<ContractId> = ctx
            .contracts
            .managed_by(self.id)
            .filter(|c| c.is_open() && !c.bids.is_empty())
            .map(|c| c.id)
            .collect();

        for contract in ready {
            match ctx.contracts.assign(contract, self.id, ctx.tick) {
                Ok(winners) => {
                    for bid in winners {
                        ctx.log.contract(
                            ctx.tick,
                            ContractEvent::Assignment {
                                contract,
                                manager:     self.id,
                                firefighter: bid.firefighter,
                                bid:         bid.value,
                            },
                        );
                    }
                }
                Err(err) => tracing::trace!(drone = %self.id, %err, "assignment deferred"),
            }
        }
    }

    // ── Movement modes ────────────────────────────────────────────────────

    fn return_to_base(&mut self, ctx: &StepContext<'_>) {
        if self.pos == self.base {
            self.battery = ctx.config.drone_max_battery;
            self.target = self.quadrant.random_cell(&mut self.rng);
            tracing::trace!(drone = %self.id, target = %self.target, "recharged");
        } else {
            let base = self.base;
            self.fly_to(base, ctx);
        }
    }

    /// Scan, announce contracts, retarget.  `false` if no fire is visible.
    fn perceive(&mut self, ctx: &mut StepContext<'_>) -> bool {
        let visible = visible_fires(ctx.forest, self.pos, ctx.config.drone_sensor_range);
        let Some(&first) = visible.first() else {
            return false;
        };

        for cluster in cluster_fires(&visible) {
            let cluster_size = cluster.len();
            match ctx.contracts.create(cluster, self.id, ctx.tick) {
                Ok(contract) => {
                    if let Some(c) = ctx.contracts.get(contract) {
                        ctx.log.contract(
                            ctx.tick,
                            ContractEvent::Created {
                                contract,
                                location: c.location,
                                cluster_size,
                                team_size: c.team_size,
                                manager: self.id,
                            },
                        );
                    }
                }
                Err(err) => tracing::trace!(drone = %self.id, %err, "cluster already covered"),
            }
        }

        if ctx.config.debug_mode {
            ctx.log.push(SimEvent::FireDetected {
                tick:  ctx.tick,
                agent: self.agent_ref(),
                fires: visible,
            });
        }
        self.target = first;
        true
    }

    fn patrol(&mut self, ctx: &StepContext<'_>) {
        if self.pos == self.target {
            self.target = self.quadrant.random_cell(&mut self.rng);
        } else {
            let target = self.target;
            self.fly_to(target, ctx);
        }
    }
}

impl FieldAgent for Drone {
    fn agent_ref(&self) -> AgentRef {
        AgentRef::Drone(self.id)
    }

    fn position(&self) -> Cell {
        self.pos
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) {
        self.log_position(ctx);
        self.assign_contracts(ctx);

        if self.battery_low(ctx.config) {
            self.return_to_base(ctx);
            return;
        }
        if self.perceive(ctx) {
            if self.pos != self.target {
                let target = self.target;
                self.fly_to(target, ctx);
            }
            return;
        }
        self.patrol(ctx);
    }
}
