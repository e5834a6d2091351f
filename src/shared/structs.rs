/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Request;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Stop => "stop",
        };
        f.write_str(name)
    }
}

/// The decision policy currently driving the elevator. Exactly one is active
/// at a time and it is held by value inside the simulation.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Policy {
    Stopped,
    MovingUp,
    MovingDown,
}

impl Policy {
    /// Builds the moving variant for `direction`. `Stop` yields `Stopped`.
    pub fn moving(direction: Direction) -> Policy {
        match direction {
            Direction::Up => Policy::MovingUp,
            Direction::Down => Policy::MovingDown,
            Direction::Stop => Policy::Stopped,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Policy::Stopped => Direction::Stop,
            Policy::MovingUp => Direction::Up,
            Policy::MovingDown => Direction::Down,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Stopped => "Stopped",
            Policy::MovingUp => "Up",
            Policy::MovingDown => "Down",
        };
        f.write_str(name)
    }
}

/// Snapshot taken at the start of a tick, before the policy decides.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTrace {
    pub policy: Policy,
    pub tick: u64,
    pub floor: u32,
}

impl fmt::Display for TickTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.policy, self.tick, self.floor)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationReport {
    #[serde(rename = "nFloors")]
    pub n_floors: u32,
    pub floor: u32,
    pub direction: Direction,
    pub policy: Policy,
    pub tick: u64,
    pub requests: Vec<Request>,
    #[serde(rename = "servicedCount")]
    pub serviced_count: usize,
    #[serde(rename = "outstandingCount")]
    pub outstanding_count: usize,
    #[serde(rename = "meanTurnaround")]
    pub mean_turnaround: Option<f64>,
}

impl SimulationReport {
    pub fn new(
        n_floors: u32,
        floor: u32,
        direction: Direction,
        policy: Policy,
        tick: u64,
        requests: Vec<Request>,
    ) -> SimulationReport {
        let turnarounds = requests
            .iter()
            .filter_map(|request| request.turnaround())
            .collect::<Vec<u64>>();

        let serviced_count = turnarounds.len();
        let mean_turnaround = if turnarounds.is_empty() {
            None
        } else {
            Some(turnarounds.iter().sum::<u64>() as f64 / serviced_count as f64)
        };

        SimulationReport {
            n_floors,
            floor,
            direction,
            policy,
            tick,
            outstanding_count: requests.len() - serviced_count,
            requests,
            serviced_count,
            mean_turnaround,
        }
    }
}
