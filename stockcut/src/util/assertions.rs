use crate::entities::{Instance, Solution};
use crate::geometry::geo_traits::{CollidesWith, Surrounds};
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of a solution
//Used in debug_assert!() blocks and in tests

pub fn solution_is_valid(instance: &Instance, solution: &Solution) -> bool {
    sheet_indices_in_range(instance, solution)
        && placements_in_bounds(instance, solution)
        && no_overlapping_placements(instance, solution)
        && component_order_preserved(instance, solution)
        && unplaced_is_suffix(solution)
}

pub fn sheet_indices_in_range(instance: &Instance, solution: &Solution) -> bool {
    match solution
        .placements
        .iter()
        .find(|p| p.sheet_idx >= instance.sheets().len())
    {
        Some(p) => {
            error!("component {} placed on non-existent sheet {}", p.component_idx, p.sheet_idx);
            false
        }
        None => true,
    }
}

/// Every component, including its tolerance margin, lies within its sheet
pub fn placements_in_bounds(instance: &Instance, solution: &Solution) -> bool {
    solution.placements.iter().all(|p| {
        let sheet = instance.sheet(p.sheet_idx);
        let footprint = p.footprint(instance.component(p.component_idx), instance.tolerance());
        let in_bounds = p.x >= 0.0 && p.y >= 0.0 && sheet.bbox().surrounds(&footprint);
        if !in_bounds {
            error!(
                "component {} at ({}, {}) exceeds sheet {}: {:?}",
                p.component_idx, p.x, p.y, p.sheet_idx, footprint
            );
        }
        in_bounds
    })
}

/// No two components on the same sheet overlap (tolerance margins are not considered)
pub fn no_overlapping_placements(instance: &Instance, solution: &Solution) -> bool {
    let by_sheet = solution.placements.iter().into_group_map_by(|p| p.sheet_idx);
    by_sheet.values().all(|placements| {
        placements.iter().tuple_combinations().all(|(p1, p2)| {
            let r1 = p1.bbox(instance.component(p1.component_idx));
            let r2 = p2.bbox(instance.component(p2.component_idx));
            if r1.collides_with(&r2) {
                error!(
                    "components {} and {} overlap on sheet {}",
                    p1.component_idx, p2.component_idx, p1.sheet_idx
                );
                false
            } else {
                true
            }
        })
    })
}

/// Placed and unplaced components together cover every component exactly once,
/// with the placements in input order
pub fn component_order_preserved(instance: &Instance, solution: &Solution) -> bool {
    let placed = solution.placements.iter().map(|p| p.component_idx).collect_vec();
    if !placed.iter().tuple_windows().all(|(a, b)| a < b) {
        error!("placements are not in component order: {placed:?}");
        return false;
    }
    let all = placed
        .iter()
        .chain(solution.unplaced.iter())
        .copied()
        .sorted()
        .collect_vec();
    let expected = (0..instance.components().len()).collect_vec();
    if all != expected {
        error!("placed and unplaced components do not match the instance: {all:?}");
        return false;
    }
    true
}

/// Once a component is unplaced, all later components are unplaced as well
pub fn unplaced_is_suffix(solution: &Solution) -> bool {
    match solution.unplaced.first() {
        None => true,
        Some(&first_unplaced) => {
            let valid = solution
                .placements
                .iter()
                .all(|p| p.component_idx < first_unplaced)
                && solution.unplaced.iter().tuple_windows().all(|(a, b)| a + 1 == *b);
            if !valid {
                error!("unplaced components are not a suffix: {:?}", solution.unplaced);
            }
            valid
        }
    }
}
