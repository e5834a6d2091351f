/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::elevator::fsm;
use crate::elevator::Request;
use crate::shared::{Direction, Policy, SimError, SimulationReport, TickTrace};

/**
 * Discrete-time elevator simulation.
 *
 * The `Simulation` owns the elevator (floor, direction, clock, active policy)
 * and every request for the whole run. Each call to `next_decision` runs one
 * tick: the active policy inspects the requests that are live at the current
 * tick, services the current floor, moves at most one floor and may hand over
 * to another policy.
 *
 * # Fields
 * - `n_floors`:        Number of floors, numbered `1..=n_floors`.
 * - `floor`:           Current floor.
 * - `direction`:       Direction reported for the active policy.
 * - `policy`:          Active decision policy.
 * - `tick`:            Simulation clock, starts at 0.
 * - `floor_handled`:   Set when a moving policy serviced the current floor;
 *                      the next moving decision skips servicing and clears it.
 * - `requests`:        All requests, in insertion order.
 * - `trace_tx`:        Optional sink for per-tick trace records.
 */
pub struct Simulation {
    n_floors: u32,
    floor: u32,
    direction: Direction,
    policy: Policy,
    tick: u64,
    floor_handled: bool,
    requests: Vec<Request>,
    trace_tx: Option<cbc::Sender<TickTrace>>,
}

impl Simulation {
    pub fn new(n_floors: u32, requests: Vec<Request>) -> Result<Simulation, SimError> {
        if n_floors < 1 {
            return Err(SimError::InvalidFloorCount(n_floors));
        }

        let in_range = |floor: u32| (1..=n_floors).contains(&floor);
        for (index, request) in requests.iter().enumerate() {
            if !in_range(request.origin()) || !in_range(request.destination()) {
                return Err(SimError::InvalidRequest {
                    index,
                    origin: request.origin(),
                    destination: request.destination(),
                    n_floors,
                });
            }
        }

        Ok(Simulation {
            n_floors,
            floor: 1,
            direction: Direction::Stop,
            policy: Policy::Stopped,
            tick: 0,
            floor_handled: false,
            requests,
            trace_tx: None,
        })
    }

    /// Builds a simulation from `(origin, destination, time)` triples.
    pub fn from_triples<I>(n_floors: u32, triples: I) -> Result<Simulation, SimError>
    where
        I: IntoIterator<Item = (u32, u32, u64)>,
    {
        Simulation::new(n_floors, triples.into_iter().map(Request::from).collect())
    }

    pub fn from_config(config: &Config) -> Result<Simulation, SimError> {
        let requests = config
            .requests
            .iter()
            .map(|request| Request::new(request.origin, request.destination, request.time))
            .collect();
        Simulation::new(config.simulation.n_floors, requests)
    }

    /// Every tick is reported to `trace_tx` from now on.
    pub fn set_trace_sink(&mut self, trace_tx: cbc::Sender<TickTrace>) {
        self.trace_tx = Some(trace_tx);
    }

    /// Runs `len_sim` ticks. Non-positive lengths do nothing.
    pub fn simulate(&mut self, len_sim: i64) {
        let ticks = len_sim.max(0);
        debug!("Simulating {} ticks from tick {}", ticks, self.tick);
        for _ in 0..ticks {
            self.next_decision();
        }
    }

    /// Runs exactly one tick under the active policy.
    pub fn next_decision(&mut self) {
        let trace = TickTrace {
            policy: self.policy,
            tick: self.tick,
            floor: self.floor,
        };
        debug!("{}", trace);
        if let Some(trace_tx) = &self.trace_tx {
            // The reader may have gone away; the trace is diagnostic only.
            let _ = trace_tx.send(trace);
        }

        match self.policy {
            Policy::Stopped => fsm::decide_stopped(self),
            Policy::MovingUp => fsm::decide_moving(self, Direction::Up),
            Policy::MovingDown => fsm::decide_moving(self, Direction::Down),
        }
    }

    /// Indices of the requests that are live at the current tick, in
    /// insertion order. Recomputed on every call.
    pub fn active_requests(&self) -> Vec<usize> {
        self.requests
            .iter()
            .enumerate()
            .filter(|(_, request)| request.is_active(self.tick))
            .map(|(index, _)| index)
            .collect()
    }

    /// Picks up and drops off at the current floor. Delivered requests are
    /// removed from `active`. Returns whether anything happened.
    pub fn service_current_floor(&mut self, active: &mut Vec<usize>) -> bool {
        let floor = self.floor;
        let tick = self.tick;
        let requests = &mut self.requests;
        let mut found = false;

        active.retain(|&index| {
            let request = &mut requests[index];
            if request.origin() == floor && !request.is_picked_up() {
                info!("Tick {}: picked up request #{} at floor {}", tick, index, floor);
                request.pick_up();
                found = true;
                true
            } else if request.destination() == floor && request.is_picked_up() {
                info!("Tick {}: delivered request #{} at floor {}", tick, index, floor);
                request.complete(tick);
                found = true;
                false
            } else {
                true
            }
        });

        found
    }

    /***************************************/
    /*             Accessors               */
    /***************************************/
    pub fn n_floors(&self) -> u32 {
        self.n_floors
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn floor_handled(&self) -> bool {
        self.floor_handled
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn request(&self, index: usize) -> Option<&Request> {
        self.requests.get(index)
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport::new(
            self.n_floors,
            self.floor,
            self.direction,
            self.policy,
            self.tick,
            self.requests.clone(),
        )
    }

    /***************************************/
    /*      Mutations used by policies     */
    /***************************************/

    /// Switches policy and keeps the reported direction in line with it.
    /// Any pending "floor handled" marker belongs to the old policy.
    pub(super) fn change_policy(&mut self, policy: Policy) {
        if policy != self.policy {
            info!("Tick {}: {} -> {} at floor {}", self.tick, self.policy, policy, self.floor);
            self.floor_handled = false;
        }
        self.policy = policy;
        self.direction = policy.direction();
    }

    /// The floor one step away in `direction`, if the building has one.
    pub(super) fn neighbour(&self, direction: Direction) -> Option<u32> {
        match direction {
            Direction::Up if self.floor < self.n_floors => Some(self.floor + 1),
            Direction::Down if self.floor > 1 => Some(self.floor - 1),
            _ => None,
        }
    }

    /// Moves one floor in `direction`. A move out of the building is refused
    /// and the elevator keeps its floor.
    pub(super) fn advance_floor(&mut self, direction: Direction) -> bool {
        match self.neighbour(direction) {
            Some(next) => {
                self.floor = next;
                true
            }
            None => {
                warn!(
                    "Tick {}: refusing to move {} from floor {} of {}",
                    self.tick, direction, self.floor, self.n_floors
                );
                false
            }
        }
    }

    pub(super) fn advance_tick(&mut self) {
        self.tick += 1;
    }

    pub(super) fn mark_floor_handled(&mut self) {
        self.floor_handled = true;
    }

    /// Reads and clears the "floor handled" marker.
    pub(super) fn take_floor_handled(&mut self) -> bool {
        std::mem::take(&mut self.floor_handled)
    }
}
