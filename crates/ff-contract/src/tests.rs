//! Unit tests for ff-contract.

#[cfg(test)]
mod helpers {
    use ff_core::{Cell, DroneId, FirefighterId, Tick};

    use crate::{Bid, ContractRegistry};

    pub const MANAGER: DroneId = DroneId(0);

    pub fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    /// A bid with a fixed value, independent of geometry.
    pub fn bid(ff: u32, value: f64) -> Bid {
        Bid {
            firefighter: FirefighterId(ff),
            value,
            distance: value,
            water: 10,
            tick: Tick(1),
        }
    }

    /// Registry with one open 4-cell contract created at tick 0.
    pub fn one_open() -> (ContractRegistry, ff_core::ContractId) {
        let mut reg = ContractRegistry::new();
        let id = reg
            .create(cells(&[(2, 2), (2, 3), (3, 2), (3, 3)]), MANAGER, Tick(0))
            .unwrap();
        (reg, id)
    }
}

#[cfg(test)]
mod bids {
    use ff_core::{Cell, FirefighterId, Tick};

    use crate::{Bid, WATER_EPSILON, bid_value};

    #[test]
    fn closer_and_wetter_bids_lower() {
        assert!(bid_value(2.0, 10) < bid_value(4.0, 10));
        assert!(bid_value(4.0, 20) < bid_value(4.0, 10));
    }

    #[test]
    fn empty_tank_is_finite() {
        let v = bid_value(3.0, 0);
        assert!(v.is_finite());
        assert_eq!(v, 3.0 / WATER_EPSILON);
    }

    #[test]
    fn bid_prices_euclidean_distance() {
        let b = Bid::new(FirefighterId(1), Cell::new(0, 0), Cell::new(3, 4), 5, Tick(2));
        assert_eq!(b.distance, 5.0);
        assert!((b.value - 5.0 / (5.0 + WATER_EPSILON)).abs() < 1e-12);
        assert_eq!(b.tick, Tick(2));
    }
}

#[cfg(test)]
mod create {
    use ff_core::{Cell, ContractId, DroneId, Tick};

    use super::helpers::{MANAGER, cells, one_open};
    use crate::{ContractError, ContractRegistry, ContractStatus, team_size_for};

    #[test]
    fn team_size_is_half_cluster_at_least_one() {
        assert_eq!(team_size_for(1), 1);
        assert_eq!(team_size_for(2), 1);
        assert_eq!(team_size_for(5), 2);
        assert_eq!(team_size_for(8), 4);
    }

    #[test]
    fn location_is_row_major_first_cell() {
        let mut reg = ContractRegistry::new();
        let id = reg
            .create(cells(&[(4, 1), (3, 2), (3, 1)]), MANAGER, Tick(5))
            .unwrap();
        let c = reg.get(id).unwrap();
        assert_eq!(c.location, Cell::new(3, 1));
        assert_eq!(c.cluster, cells(&[(3, 1), (3, 2), (4, 1)]));
        assert_eq!(c.status, ContractStatus::Open);
        assert_eq!(c.timestamp, Tick(5));
        assert_eq!(c.team_size, 1);
        assert!(c.assign_time.is_none());
    }

    #[test]
    fn ids_are_unique_even_for_same_location_and_tick() {
        let mut reg = ContractRegistry::new();
        let a = reg.create(cells(&[(0, 0)]), DroneId(0), Tick(1)).unwrap();
        let b = reg.create(cells(&[(5, 5)]), DroneId(1), Tick(1)).unwrap();
        assert_ne!(a, b);
        assert_eq!((a, b), (ContractId(0), ContractId(1)));
    }

    #[test]
    fn covered_cells_are_refused() {
        let (mut reg, id) = one_open();
        let err = reg.create(cells(&[(3, 3), (3, 4)]), DroneId(1), Tick(0)).unwrap_err();
        assert_eq!(err, ContractError::CellCovered { cell: Cell::new(3, 3), by: id });
        assert_eq!(reg.len(), 1);
        assert!(reg.has_live_contract(Cell::new(2, 2)));
        assert!(!reg.cluster_is_free(&cells(&[(9, 9), (2, 3)])));
        assert!(reg.cluster_is_free(&cells(&[(9, 9)])));
    }

    #[test]
    fn empty_cluster_is_refused() {
        let mut reg = ContractRegistry::new();
        assert_eq!(reg.create(vec![], MANAGER, Tick(0)), Err(ContractError::EmptyCluster));
    }

    #[test]
    fn no_contracts_means_no_completion_rate() {
        assert_eq!(ContractRegistry::new().completion_rate(), None);
    }
}

#[cfg(test)]
mod bidding {
    use ff_core::FirefighterId;
    use ff_core::Tick;

    use super::helpers::{MANAGER, bid, one_open};
    use crate::{ContractError, ContractStatus};

    #[test]
    fn one_bid_per_firefighter() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(1, 2.0)).unwrap();
        let err = reg.submit_bid(id, bid(1, 0.5)).unwrap_err();
        assert_eq!(err, ContractError::DuplicateBid { contract: id, firefighter: FirefighterId(1) });
        assert_eq!(reg.get(id).unwrap().bids.len(), 1);
        assert!(reg.has_bid(id, FirefighterId(1)));
        assert_eq!(reg.outstanding_bid(FirefighterId(1)), Some(id));
        assert_eq!(reg.outstanding_bid(FirefighterId(2)), None);
    }

    #[test]
    fn bids_refused_once_assigned() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(1, 2.0)).unwrap();
        reg.assign(id, MANAGER, Tick(1)).unwrap();
        let err = reg.submit_bid(id, bid(2, 1.0)).unwrap_err();
        assert_eq!(err, ContractError::NotOpen { contract: id, status: ContractStatus::Assigned });
        assert_eq!(reg.get(id).unwrap().bids.len(), 1);
    }
}

#[cfg(test)]
mod assignment {
    use ff_core::{DroneId, FirefighterId, Tick};

    use super::helpers::{MANAGER, bid, one_open};
    use crate::{ContractError, ContractStatus};

    #[test]
    fn lowest_bids_win_up_to_team_size() {
        let (mut reg, id) = one_open(); // 4 cells → team of 2
        reg.submit_bid(id, bid(1, 3.0)).unwrap();
        reg.submit_bid(id, bid(2, 1.0)).unwrap();
        reg.submit_bid(id, bid(3, 2.0)).unwrap();

        let winners = reg.assign(id, MANAGER, Tick(1)).unwrap();
        assert_eq!(winners.len(), 2);

        let c = reg.get(id).unwrap();
        assert_eq!(c.assigned, vec![FirefighterId(2), FirefighterId(3)]);
        assert_eq!(c.status, ContractStatus::Assigned);
        assert_eq!(c.assign_time, Some(Tick(1)));
        assert!(c.assigned.len() <= c.team_size);
    }

    #[test]
    fn ties_keep_submission_order() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(7, 1.0)).unwrap();
        reg.submit_bid(id, bid(4, 1.0)).unwrap();
        reg.submit_bid(id, bid(5, 1.0)).unwrap();
        reg.assign(id, MANAGER, Tick(3)).unwrap();
        assert_eq!(reg.get(id).unwrap().assigned, vec![FirefighterId(7), FirefighterId(4)]);
    }

    #[test]
    fn under_strength_team_is_allowed() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(1, 3.0)).unwrap();
        reg.assign(id, MANAGER, Tick(1)).unwrap();
        assert_eq!(reg.get(id).unwrap().assigned, vec![FirefighterId(1)]);
    }

    #[test]
    fn only_manager_may_assign() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(1, 3.0)).unwrap();
        let err = reg.assign(id, DroneId(9), Tick(1)).unwrap_err();
        assert_eq!(err, ContractError::NotManager { contract: id, drone: DroneId(9) });
        assert!(reg.get(id).unwrap().is_open());
    }

    #[test]
    fn needs_a_bid_and_a_tick() {
        let (mut reg, id) = one_open();
        assert_eq!(reg.assign(id, MANAGER, Tick(1)), Err(ContractError::NoBids(id)));
        reg.submit_bid(id, bid(1, 3.0)).unwrap();
        assert!(matches!(reg.assign(id, MANAGER, Tick(0)), Err(ContractError::TooEarly { .. })));
        assert!(reg.assign(id, MANAGER, Tick(1)).is_ok());
    }

    #[test]
    fn cannot_assign_twice() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(1, 3.0)).unwrap();
        reg.assign(id, MANAGER, Tick(1)).unwrap();
        assert!(matches!(reg.assign(id, MANAGER, Tick(2)), Err(ContractError::NotOpen { .. })));
    }
}

#[cfg(test)]
mod completion {
    use ff_core::{Cell, DroneId, FirefighterId, Tick};

    use super::helpers::{MANAGER, bid, cells, one_open};
    use crate::{ContractError, ContractStatus};

    #[test]
    fn assignee_completes_and_frees_cells() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(1, 1.0)).unwrap();
        reg.assign(id, MANAGER, Tick(1)).unwrap();
        assert_eq!(reg.assigned_to(FirefighterId(1)).count(), 1);

        reg.complete(id, FirefighterId(1), Tick(4)).unwrap();
        let c = reg.get(id).unwrap();
        assert_eq!(c.status, ContractStatus::Complete);
        assert_eq!(c.time_to_extinguish(), Some(3));
        assert_eq!(c.cluster.len(), 4, "cluster kept for reporting");
        assert!(!reg.has_live_contract(Cell::new(2, 2)));
        assert_eq!(reg.assigned_to(FirefighterId(1)).count(), 0);

        // The freed cells can be contracted again.
        assert!(reg.create(cells(&[(2, 2)]), DroneId(1), Tick(5)).is_ok());
        assert_eq!(reg.completion_rate(), Some(0.5));
    }

    #[test]
    fn strangers_cannot_complete() {
        let (mut reg, id) = one_open();
        reg.submit_bid(id, bid(1, 1.0)).unwrap();
        reg.assign(id, MANAGER, Tick(1)).unwrap();
        let err = reg.complete(id, FirefighterId(2), Tick(2)).unwrap_err();
        assert_eq!(err, ContractError::NotAssignee { contract: id, firefighter: FirefighterId(2) });
    }

    #[test]
    fn no_transition_skips_or_regresses() {
        let (mut reg, id) = one_open();
        // Open → Complete is illegal.
        assert!(matches!(
            reg.complete(id, FirefighterId(1), Tick(1)),
            Err(ContractError::IllegalTransition { from: ContractStatus::Open, .. })
        ));
        reg.submit_bid(id, bid(1, 1.0)).unwrap();
        reg.assign(id, MANAGER, Tick(1)).unwrap();
        reg.complete(id, FirefighterId(1), Tick(2)).unwrap();
        // Complete is terminal.
        assert!(reg.complete(id, FirefighterId(1), Tick(3)).is_err());
        assert!(reg.assign(id, MANAGER, Tick(3)).is_err());
        assert_eq!(reg.get(id).unwrap().status, ContractStatus::Complete);
    }

    #[test]
    fn status_transition_table() {
        use ContractStatus::*;
        assert!(Open.can_transition_to(Assigned));
        assert!(Assigned.can_transition_to(Complete));
        assert!(!Open.can_transition_to(Complete));
        assert!(!Assigned.can_transition_to(Open));
        assert!(!Complete.can_transition_to(Open));
        assert!(!Complete.can_transition_to(Assigned));
    }

    #[test]
    fn stats_count_by_status() {
        let (mut reg, id) = one_open();
        reg.create(cells(&[(9, 9)]), DroneId(1), Tick(0)).unwrap();
        reg.submit_bid(id, bid(1, 1.0)).unwrap();
        reg.assign(id, MANAGER, Tick(1)).unwrap();
        let stats = reg.stats();
        assert_eq!((stats.open, stats.assigned, stats.complete), (1, 1, 0));
        assert_eq!(stats.total(), 2);
        assert_eq!(reg.managed_by(MANAGER).count(), 1);
    }
}
