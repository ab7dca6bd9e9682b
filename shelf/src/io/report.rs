use itertools::Itertools;
use stockcut::entities::{Instance, Solution};

/// Human readable summary of a placement run: one line per placed component (1-based numbering),
/// followed by a line listing the components that did not fit, if any.
pub fn report_lines(instance: &Instance, solution: &Solution) -> Vec<String> {
    let mut lines = solution
        .placements
        .iter()
        .map(|p| {
            let c = instance.component(p.component_idx);
            format!(
                "component {}: length {} mm, width {} mm, position ({}, {}) on sheet {}",
                p.component_idx + 1,
                c.length,
                c.width,
                p.x,
                p.y,
                p.sheet_idx + 1
            )
        })
        .collect_vec();

    if !solution.unplaced.is_empty() {
        lines.push(format!(
            "components not placed (insufficient sheet space): {}",
            solution.unplaced.iter().map(|i| i + 1).join(", ")
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcut::entities::{Component, Sheet};
    use stockcut::shelf::place_instance;

    #[test]
    fn lists_placements_then_unplaced() {
        let instance = Instance::new(
            vec![Sheet::new(100.0, 100.0, 1.0)],
            vec![
                Component::new(50.0, 60.0),
                Component::new(50.0, 40.0),
                Component::new(50.0, 100.0),
                Component::new(10.0, 10.0),
            ],
            0.0,
        )
        .unwrap();
        let lines = report_lines(&instance, &place_instance(&instance));
        assert_eq!(
            lines,
            vec![
                "component 1: length 50 mm, width 60 mm, position (0, 0) on sheet 1",
                "component 2: length 50 mm, width 40 mm, position (60, 0) on sheet 1",
                "component 3: length 50 mm, width 100 mm, position (0, 50) on sheet 1",
                "components not placed (insufficient sheet space): 4",
            ]
        );
    }

    #[test]
    fn no_unplaced_line_when_everything_fits() {
        let instance = Instance::new(
            vec![Sheet::new(100.0, 100.0, 1.0)],
            vec![Component::new(10.0, 10.0)],
            2.5,
        )
        .unwrap();
        let lines = report_lines(&instance, &place_instance(&instance));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("position (0, 0) on sheet 1"));
    }
}
