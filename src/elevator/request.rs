/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;

/**
 * A single transport demand from `origin` to `destination`.
 *
 * The origin, destination and creation time never change. The simulation
 * marks the request picked up when the elevator visits the origin, and
 * serviced (recording the arrival tick) when it later visits the destination.
 * A serviced request is inert for the rest of the run.
 *
 * # Fields
 * - `origin`:        Floor the passenger is waiting on.
 * - `destination`:   Floor the passenger wants to reach.
 * - `time`:          Tick at which the request appears.
 * - `picked_up`:     The passenger is in the elevator.
 * - `serviced`:      The passenger has been delivered.
 * - `arrival`:       Tick of delivery, unset until serviced.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    origin: u32,
    destination: u32,
    time: u64,
    #[serde(rename = "pickedUp")]
    picked_up: bool,
    serviced: bool,
    arrival: Option<u64>,
}

impl Request {
    pub fn new(origin: u32, destination: u32, time: u64) -> Request {
        Request {
            origin,
            destination,
            time,
            picked_up: false,
            serviced: false,
            arrival: None,
        }
    }

    pub fn origin(&self) -> u32 {
        self.origin
    }

    pub fn destination(&self) -> u32 {
        self.destination
    }

    pub fn created_at(&self) -> u64 {
        self.time
    }

    pub fn is_picked_up(&self) -> bool {
        self.picked_up
    }

    pub fn is_serviced(&self) -> bool {
        self.serviced
    }

    /// Tick at which the destination was reached, if it has been.
    pub fn arrival(&self) -> Option<u64> {
        self.arrival
    }

    /// Ticks between creation and delivery.
    pub fn turnaround(&self) -> Option<u64> {
        self.arrival.map(|arrival| arrival.saturating_sub(self.time))
    }

    /// Created by `tick` and not yet delivered.
    pub fn is_active(&self, tick: u64) -> bool {
        self.time <= tick && !self.serviced
    }

    /// The floor the elevator has to reach next for this request.
    pub fn target(&self) -> u32 {
        if self.picked_up {
            self.destination
        } else {
            self.origin
        }
    }

    pub(crate) fn pick_up(&mut self) {
        self.picked_up = true;
    }

    pub(crate) fn complete(&mut self, tick: u64) {
        debug_assert!(self.picked_up, "request completed before pickup");
        self.serviced = true;
        self.arrival = Some(tick);
    }
}

impl From<(u32, u32, u64)> for Request {
    fn from((origin, destination, time): (u32, u32, u64)) -> Request {
        Request::new(origin, destination, time)
    }
}
