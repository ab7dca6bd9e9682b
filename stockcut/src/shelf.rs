use crate::entities::{Component, Instance, Placement, Sheet, Solution};
use crate::error::ConfigError;
use crate::util::assertions;
use log::{debug, info};
use thousands::Separable;

/// Places `components` onto `sheets` with the shelf heuristic.
///
/// All input is validated before any placement is attempted, see [`Instance::new`].
/// Components that do not fit are not an error: they are listed in [`Solution::unplaced`].
pub fn place(
    sheets: &[Sheet],
    components: &[Component],
    tolerance: f64,
) -> Result<Solution, ConfigError> {
    let instance = Instance::new(sheets.to_vec(), components.to_vec(), tolerance)?;
    Ok(place_instance(&instance))
}

/// Places every component of a validated [`Instance`].
///
/// Components are visited once, in input order. Each one is put to the right of the previous
/// component in the current row; a component that would cross the sheet's width opens a new row
/// below the tallest component of the current row, and one that would cross the sheet's length
/// moves on to the next sheet. Sheets are never revisited and components are never reordered or
/// rotated. Once the last sheet is exhausted, every remaining component is unplaced.
pub fn place_instance(instance: &Instance) -> Solution {
    let tolerance = instance.tolerance();
    let mut cursor = ShelfCursor::default();
    let mut solution = Solution::default();

    for (component_idx, component) in instance.components().iter().enumerate() {
        if cursor.exhausted {
            solution.unplaced.push(component_idx);
            continue;
        }
        match cursor.fit(instance.sheets(), component, tolerance) {
            Some((x, y)) => {
                let placement = Placement {
                    component_idx,
                    sheet_idx: cursor.sheet_idx,
                    x,
                    y,
                };
                debug!(
                    "[SHELF] placing component {} ({} x {}) at ({}, {}) on sheet {}",
                    component_idx, component.width, component.length, x, y, cursor.sheet_idx
                );
                cursor.advance(component, tolerance);
                solution.placements.push(placement);
            }
            None => {
                debug!("[SHELF] sheets exhausted at component {component_idx}");
                solution.unplaced.push(component_idx);
            }
        }
    }

    info!(
        "[SHELF] placed {}/{} components on {} sheet(s), {} unplaced",
        solution.placements.len().separate_with_commas(),
        instance.components().len().separate_with_commas(),
        solution.n_sheets_used(),
        solution.unplaced.len().separate_with_commas()
    );

    debug_assert!(assertions::solution_is_valid(instance, &solution));

    solution
}

/// Position of the shelf heuristic within the sequence of sheets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ShelfCursor {
    sheet_idx: usize,
    x: f64,
    y: f64,
    /// Height (length + tolerance) of the tallest component in the current row
    row_height: f64,
    /// Set once the cursor moved past the last sheet
    exhausted: bool,
}

impl ShelfCursor {
    /// Moves the cursor to the first position where `component` fits and returns it.
    /// Returns `None` and marks the cursor as exhausted if no remaining sheet can hold it.
    fn fit(
        &mut self,
        sheets: &[Sheet],
        component: &Component,
        tolerance: f64,
    ) -> Option<(f64, f64)> {
        // summed left to right, the order in which the bounds are checked everywhere else
        let exceeds_width =
            |x: f64, sheet: &Sheet| x + component.width + tolerance > sheet.width;
        let exceeds_length =
            |y: f64, sheet: &Sheet| y + component.length + tolerance > sheet.length;
        loop {
            let Some(sheet) = sheets.get(self.sheet_idx) else {
                self.exhausted = true;
                return None;
            };
            if exceeds_width(self.x, sheet) {
                self.new_row();
            }
            // after a row advance x is 0, so the width check only fails again for a component
            // which is wider than the sheet itself
            if exceeds_length(self.y, sheet) || exceeds_width(self.x, sheet) {
                self.next_sheet();
                continue;
            }
            return Some((self.x, self.y));
        }
    }

    fn advance(&mut self, component: &Component, tolerance: f64) {
        self.x += component.width + tolerance;
        self.row_height = f64::max(self.row_height, component.length + tolerance);
    }

    fn new_row(&mut self) {
        self.x = 0.0;
        self.y += self.row_height;
        self.row_height = 0.0;
    }

    fn next_sheet(&mut self) {
        debug!("[SHELF] sheet {} full, moving to the next sheet", self.sheet_idx);
        self.sheet_idx += 1;
        self.x = 0.0;
        self.y = 0.0;
        self.row_height = 0.0;
    }
}
