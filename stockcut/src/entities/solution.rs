use crate::entities::{Instance, Placement};
use itertools::Itertools;

/// Result of a placement run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution {
    /// One placement per placed component, in component order
    pub placements: Vec<Placement>,
    /// Indices of the components that could not be placed, ascending
    pub unplaced: Vec<usize>,
}

impl Solution {
    /// True if every component of the instance received a placement
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// All placements assigned to the sheet with index `sheet_idx`
    pub fn placements_on(&self, sheet_idx: usize) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.sheet_idx == sheet_idx)
    }

    /// Indices of the sheets which hold at least one component, ascending
    pub fn used_sheets(&self) -> Vec<usize> {
        self.placements
            .iter()
            .map(|p| p.sheet_idx)
            .unique()
            .sorted()
            .collect()
    }

    pub fn n_sheets_used(&self) -> usize {
        self.used_sheets().len()
    }

    /// Fraction of a sheet's area covered by components (tolerance margins excluded)
    pub fn sheet_density(&self, instance: &Instance, sheet_idx: usize) -> f64 {
        let used_area = self
            .placements_on(sheet_idx)
            .map(|p| instance.component(p.component_idx).area())
            .sum::<f64>();
        used_area / instance.sheet(sheet_idx).area()
    }

    /// Area of all placed components divided by the area of all used sheets
    pub fn density(&self, instance: &Instance) -> f64 {
        let sheet_area = self
            .used_sheets()
            .into_iter()
            .map(|s| instance.sheet(s).area())
            .sum::<f64>();
        if sheet_area == 0.0 {
            return 0.0;
        }
        let component_area = self
            .placements
            .iter()
            .map(|p| instance.component(p.component_idx).area())
            .sum::<f64>();
        component_area / sheet_area
    }
}
