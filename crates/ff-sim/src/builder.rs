//! Fluent builder for constructing a [`Sim`].

use ff_agent::{Drone, Firefighter};
use ff_contract::ContractRegistry;
use ff_core::{Cell, DroneId, EventLog, FireConfig, FirefighterId, SimClock, SimRng};
use ff_grid::{Forest, Tree};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`FireConfig`]: grid size, densities, agent counts, resources, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                                         |
/// |------------------------------|-------------------------------------------------|
/// | `.forest(f)`                 | Random planting + centre square ignition        |
/// | `.firefighter_positions(v)`  | Random cells, tree-free ones first              |
/// | `.drone_positions(v)`        | Random cells, tree-free ones first              |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .firefighter_positions(vec![Cell::new(0, 0)])
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:                FireConfig,
    forest:                Option<Forest>,
    firefighter_positions: Option<Vec<Cell>>,
    drone_positions:       Option<Vec<Cell>>,
}

impl SimBuilder {
    pub fn new(config: FireConfig) -> Self {
        Self {
            config,
            forest:                None,
            firefighter_positions: None,
            drone_positions:       None,
        }
    }

    /// Supply a hand-built forest instead of planting one at random.
    ///
    /// Its size must equal `config.size`.  No fire is added: whatever is
    /// burning in `forest` is the initial fire.
    pub fn forest(mut self, forest: Forest) -> Self {
        self.forest = Some(forest);
        self
    }

    /// Supply spawn cells for the firefighters (must be length
    /// `num_firefighters`).  Each spawn cell is also that firefighter's base.
    pub fn firefighter_positions(mut self, positions: Vec<Cell>) -> Self {
        self.firefighter_positions = Some(positions);
        self
    }

    /// Supply spawn cells for the drones (must be length `num_drones`).
    pub fn drone_positions(mut self, positions: Vec<Cell>) -> Self {
        self.drone_positions = Some(positions);
        self
    }

    /// Validate inputs, set up the forest and agents, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;
        let size = config.grid_size();
        let mut rng = SimRng::new(config.seed);

        // ── Forest ────────────────────────────────────────────────────────
        let forest = match self.forest {
            Some(forest) => {
                if forest.size() != size {
                    return Err(SimError::ForestSize { expected: size, got: forest.size() });
                }
                forest
            }
            None => {
                let mut forest = Forest::new(config.size);
                let template = Tree::new(config.tree_burn_time, config.tree_growth_rate);
                forest.plant_random(config.tree_density, template, &mut rng);
                forest.ignite_square(forest.center(), config.initial_fire_size);
                forest
            }
        };

        // ── Spawn cells ───────────────────────────────────────────────────
        let n_ff = config.num_firefighters as usize;
        let n_drones = config.num_drones as usize;
        let mut spawns = spawn_cells(&forest, n_ff + n_drones, &mut rng).into_iter();
        let random_ff: Vec<Cell> = spawns.by_ref().take(n_ff).collect();
        let random_drones: Vec<Cell> = spawns.collect();

        let ff_cells = resolve(self.firefighter_positions, random_ff, size, "firefighter positions")?;
        let drone_cells = resolve(self.drone_positions, random_drones, size, "drone positions")?;

        let firefighters: Vec<Firefighter> = ff_cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| Firefighter::new(FirefighterId(i as u32), cell, &config))
            .collect();
        let drones: Vec<Drone> = drone_cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| Drone::new(DroneId(i as u32), cell, &config))
            .collect();

        tracing::info!(
            size,
            trees = forest.tree_count(),
            burning = forest.burning_cells().len(),
            firefighters = firefighters.len(),
            drones = drones.len(),
            seed = config.seed,
            "simulation built"
        );

        Ok(Sim {
            clock: SimClock::new(config.steps),
            config,
            forest,
            contracts: ContractRegistry::new(),
            firefighters,
            drones,
            rng,
            log: EventLog::new(),
        })
    }
}

/// `n` spawn cells: distinct tree-free cells in random order, then, once
/// those run out, random cells anywhere (agents may share a cell with a tree
/// or another agent).
fn spawn_cells(forest: &Forest, n: usize, rng: &mut SimRng) -> Vec<Cell> {
    let mut free = forest.tree_free_cells();
    rng.shuffle(&mut free);
    free.truncate(n);

    let size = forest.size();
    while free.len() < n {
        free.push(Cell::new(rng.gen_range(0..size), rng.gen_range(0..size)));
    }
    free
}

/// Use the caller's positions if given (checking length and bounds),
/// otherwise the randomly drawn ones.
fn resolve(
    given: Option<Vec<Cell>>,
    drawn: Vec<Cell>,
    size:  i32,
    what:  &'static str,
) -> SimResult<Vec<Cell>> {
    let Some(cells) = given else {
        return Ok(drawn);
    };
    if cells.len() != drawn.len() {
        return Err(SimError::AgentCountMismatch { expected: drawn.len(), got: cells.len(), what });
    }
    if let Some(&cell) = cells.iter().find(|c| !c.in_bounds(size)) {
        return Err(SimError::OutOfBounds { what, cell, size });
    }
    Ok(cells)
}
