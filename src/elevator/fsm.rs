/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Simulation;
use crate::shared::{Direction, Policy};

/**
 * Decision for the `Stopped` policy.
 *
 * With nothing live the elevator idles. Otherwise it services its own floor,
 * then heads for the closest target floor: up if that floor is above,
 * down in every other case.
 */
pub(super) fn decide_stopped(sim: &mut Simulation) {
    let mut active = sim.active_requests();

    if !active.is_empty() {
        // A request may appear on the floor the elevator is resting at.
        sim.service_current_floor(&mut active);

        if let Some(target) = closest_target_floor(sim, &active) {
            let direction = if target > sim.floor() {
                Direction::Up
            } else {
                Direction::Down
            };

            if sim.advance_floor(direction) {
                sim.change_policy(Policy::moving(direction));
            }
        }
    }

    sim.advance_tick();
}

/**
 * Decision for `MovingUp` and `MovingDown`.
 *
 * - No live requests: switch to `Stopped` without moving.
 * - Something to pick up or drop off here (and this floor was not already
 *   handled on the previous tick): service it and stay put for this tick.
 * - Otherwise keep going while a target lies strictly ahead, else reverse.
 */
pub(super) fn decide_moving(sim: &mut Simulation, direction: Direction) {
    let mut active = sim.active_requests();

    if active.is_empty() {
        sim.change_policy(Policy::Stopped);
        sim.advance_tick();
        return;
    }

    if sim.take_floor_handled() || !sim.service_current_floor(&mut active) {
        let next = if request_on_path(sim, &active, direction) {
            direction
        } else {
            debug!("Tick {}: nothing ahead going {}, reversing", sim.tick(), direction);
            direction.opposite()
        };

        sim.change_policy(Policy::moving(next));
        sim.advance_floor(next);
    } else {
        sim.mark_floor_handled();
    }

    sim.advance_tick();
}

/// Target floor nearest to the elevator. Equal distances resolve to a floor
/// above the elevator if one is among them, otherwise to the earliest request.
pub(super) fn closest_target_floor(sim: &Simulation, active: &[usize]) -> Option<u32> {
    let current = sim.floor();

    active
        .iter()
        .map(|&index| sim.requests()[index].target())
        .fold(None, |best: Option<(u32, u32)>, target| {
            let distance = target.abs_diff(current);
            match best {
                Some((best_distance, _)) if distance > best_distance => best,
                Some((best_distance, _)) if distance == best_distance && target <= current => best,
                _ => Some((distance, target)),
            }
        })
        .map(|(_, floor)| floor)
}

/// Whether any live request still needs a floor strictly beyond the
/// elevator in `direction`.
pub(super) fn request_on_path(sim: &Simulation, active: &[usize], direction: Direction) -> bool {
    let current = sim.floor();

    active.iter().any(|&index| {
        let target = sim.requests()[index].target();
        match direction {
            Direction::Up => target > current,
            Direction::Down => target < current,
            Direction::Stop => false,
        }
    })
}
