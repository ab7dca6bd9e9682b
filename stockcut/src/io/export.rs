use crate::entities::{Instance, Solution};
use crate::io::ext_repr::{
    ExtComponent, ExtInstance, ExtLayout, ExtNumber, ExtPlacement, ExtSheet, ExtSolution,
};

/// Exports an instance out of the library, all fields as numbers
pub fn export_instance(instance: &Instance) -> ExtInstance {
    ExtInstance {
        sheets: instance
            .sheets()
            .iter()
            .map(|s| ExtSheet {
                length: s.length.into(),
                width: s.width.into(),
                thickness: Some(s.thickness.into()),
            })
            .collect(),
        components: instance
            .components()
            .iter()
            .map(|c| ExtComponent {
                length: c.length.into(),
                width: c.width.into(),
            })
            .collect(),
        tolerance: ExtNumber::Number(instance.tolerance()),
    }
}

/// Exports a solution out of the library
pub fn export_solution(instance: &Instance, solution: &Solution) -> ExtSolution {
    let placements = solution
        .placements
        .iter()
        .map(|p| {
            let c = instance.component(p.component_idx);
            ExtPlacement {
                component_id: p.component_idx,
                sheet_id: p.sheet_idx,
                x: p.x,
                y: p.y,
                length: c.length,
                width: c.width,
            }
        })
        .collect();

    let layouts = solution
        .used_sheets()
        .into_iter()
        .map(|sheet_idx| ExtLayout {
            sheet_id: sheet_idx,
            component_ids: solution
                .placements_on(sheet_idx)
                .map(|p| p.component_idx)
                .collect(),
            density: solution.sheet_density(instance, sheet_idx),
        })
        .collect();

    ExtSolution {
        placements,
        unplaced: solution.unplaced.clone(),
        layouts,
        n_sheets_used: solution.n_sheets_used(),
        density: solution.density(instance),
    }
}
