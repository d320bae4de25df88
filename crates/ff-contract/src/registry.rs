//! `ContractRegistry`: the one place contracts are created and mutated.
//!
//! Drones and firefighters receive `&mut ContractRegistry` in turn during a
//! tick.  Because agents step sequentially, every agent sees the writes of
//! the agents that stepped before it in the same tick.
//!
//! # Storage
//!
//! Contracts live in a `Vec` indexed by `ContractId` (ids are allocated from
//! its length, so they are dense and monotonic).  A `Cell → ContractId`
//! index tracks which cells are covered by a live (open or assigned)
//! contract; a cell leaves the index when its contract completes.

use rustc_hash::FxHashMap;

use ff_core::{Cell, ContractId, DroneId, FirefighterId, Tick};

use crate::{Bid, Contract, ContractError, ContractResult, ContractStatus, team_size_for};

/// Contract counts by status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractStats {
    pub open:     usize,
    pub assigned: usize,
    pub complete: usize,
}

impl ContractStats {
    #[inline]
    pub fn total(&self) -> usize {
        self.open + self.assigned + self.complete
    }
}

/// Owner of every contract in a run.
#[derive(Default, Debug)]
pub struct ContractRegistry {
    contracts:  Vec<Contract>,
    live_cells: FxHashMap<Cell, ContractId>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Creation ──────────────────────────────────────────────────────────

    /// Announce a contract for `cluster`, managed by `manager`.
    ///
    /// The cluster is sorted row-major and de-duplicated; its first cell
    /// becomes the contract's `location`.  Refused if any cell is already
    /// covered by a live contract.
    pub fn create(
        &mut self,
        mut cluster: Vec<Cell>,
        manager:     DroneId,
        now:         Tick,
    ) -> ContractResult<ContractId> {
        cluster.sort_unstable();
        cluster.dedup();
        let Some(&location) = cluster.first() else {
            return Err(ContractError::EmptyCluster);
        };
        if let Some((&cell, &by)) = cluster
            .iter()
            .find_map(|c| self.live_cells.get_key_value(c))
        {
            return Err(ContractError::CellCovered { cell, by });
        }

        let id = ContractId(self.contracts.len() as u32);
        for &cell in &cluster {
            self.live_cells.insert(cell, id);
        }
        let team_size = team_size_for(cluster.len());
        self.contracts.push(Contract {
            id,
            location,
            cluster,
            status: ContractStatus::Open,
            bids: Vec::new(),
            assigned: Vec::new(),
            team_size,
            timestamp: now,
            assign_time: None,
            complete_time: None,
            manager,
        });
        tracing::debug!(contract = %id, %location, %manager, team_size, "contract created");
        Ok(id)
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn get(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get(id.index())
    }

    /// All contracts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Contract> + '_ {
        self.contracts.iter()
    }

    pub fn by_status(&self, status: ContractStatus) -> impl Iterator<Item = &Contract> + '_ {
        self.contracts.iter().filter(move |c| c.status == status)
    }

    /// Live contracts `drone` manages.
    pub fn managed_by(&self, drone: DroneId) -> impl Iterator<Item = &Contract> + '_ {
        self.contracts
            .iter()
            .filter(move |c| c.manager == drone && c.status.is_live())
    }

    /// Assigned (not yet complete) contracts `firefighter` is committed to,
    /// in creation order.
    pub fn assigned_to(&self, firefighter: FirefighterId) -> impl Iterator<Item = &Contract> + '_ {
        self.contracts.iter().filter(move |c| {
            c.status == ContractStatus::Assigned && c.is_assigned_to(firefighter)
        })
    }

    /// The first open contract `firefighter` has bid on, if any.
    pub fn outstanding_bid(&self, firefighter: FirefighterId) -> Option<ContractId> {
        self.by_status(ContractStatus::Open)
            .find(|c| c.has_bid_from(firefighter))
            .map(|c| c.id)
    }

    #[inline]
    pub fn has_live_contract(&self, cell: Cell) -> bool {
        self.live_cells.contains_key(&cell)
    }

    /// `true` if no cell of `cluster` is covered by a live contract.
    pub fn cluster_is_free(&self, cluster: &[Cell]) -> bool {
        cluster.iter().all(|c| !self.has_live_contract(*c))
    }

    pub fn has_bid(&self, id: ContractId, firefighter: FirefighterId) -> bool {
        self.get(id).is_some_and(|c| c.has_bid_from(firefighter))
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn stats(&self) -> ContractStats {
        let mut stats = ContractStats::default();
        for c in &self.contracts {
            match c.status {
                ContractStatus::Open     => stats.open += 1,
                ContractStatus::Assigned => stats.assigned += 1,
                ContractStatus::Complete => stats.complete += 1,
            }
        }
        stats
    }

    /// Completed / created.  `None` before any contract exists.
    pub fn completion_rate(&self) -> Option<f64> {
        let stats = self.stats();
        (stats.total() > 0).then(|| stats.complete as f64 / stats.total() as f64)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn contract_mut(&mut self, id: ContractId) -> ContractResult<&mut Contract> {
        self.contracts
            .get_mut(id.index())
            .ok_or(ContractError::UnknownContract(id))
    }

    /// Append `bid` to an open contract.  One bid per firefighter, ever.
    pub fn submit_bid(&mut self, id: ContractId, bid: Bid) -> ContractResult<()> {
        let contract = self.contract_mut(id)?;
        if contract.status != ContractStatus::Open {
            return Err(ContractError::NotOpen { contract: id, status: contract.status });
        }
        if contract.has_bid_from(bid.firefighter) {
            return Err(ContractError::DuplicateBid { contract: id, firefighter: bid.firefighter });
        }
        contract.bids.push(bid);
        Ok(())
    }

    /// Award an open contract to its best bids.
    ///
    /// Only the managing drone may assign, only once at least one bid is in,
    /// and only from the tick after creation onwards.  Bids are ranked by
    /// ascending value (ties keep submission order) and the lowest
    /// `team_size` win; fewer bids than `team_size` yields a smaller team.
    /// Returns the winning bids.
    pub fn assign(&mut self, id: ContractId, manager: DroneId, now: Tick) -> ContractResult<Vec<Bid>> {
        let contract = self.contract_mut(id)?;
        if contract.manager != manager {
            return Err(ContractError::NotManager { contract: id, drone: manager });
        }
        if !contract.status.can_transition_to(ContractStatus::Assigned) {
            return Err(ContractError::NotOpen { contract: id, status: contract.status });
        }
        if contract.bids.is_empty() {
            return Err(ContractError::NoBids(id));
        }
        if now.since(contract.timestamp) < 1 {
            return Err(ContractError::TooEarly { contract: id, created: contract.timestamp, now });
        }

        let mut ranked = contract.bids.clone();
        ranked.sort_by(|a, b| a.value.total_cmp(&b.value));
        ranked.truncate(contract.team_size);

        contract.assigned = ranked.iter().map(|b| b.firefighter).collect();
        contract.status = ContractStatus::Assigned;
        contract.assign_time = Some(now);
        tracing::debug!(contract = %id, team = contract.assigned.len(), "contract assigned");
        Ok(ranked)
    }

    /// Close an assigned contract.  Only one of its assignees may do so.
    pub fn complete(&mut self, id: ContractId, firefighter: FirefighterId, now: Tick) -> ContractResult<()> {
        // Field borrow (not `contract_mut`) so `live_cells` stays reachable.
        let contract = self
            .contracts
            .get_mut(id.index())
            .ok_or(ContractError::UnknownContract(id))?;
        if !contract.status.can_transition_to(ContractStatus::Complete) {
            return Err(ContractError::IllegalTransition {
                contract: id,
                from:     contract.status,
                to:       ContractStatus::Complete,
            });
        }
        if !contract.is_assigned_to(firefighter) {
            return Err(ContractError::NotAssignee { contract: id, firefighter });
        }
        contract.status = ContractStatus::Complete;
        contract.complete_time = Some(now);

        for cell in &contract.cluster {
            if self.live_cells.get(cell) == Some(&id) {
                self.live_cells.remove(cell);
            }
        }
        tracing::debug!(contract = %id, %firefighter, "contract complete");
        Ok(())
    }
}
