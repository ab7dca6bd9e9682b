use crate::entities::{Instance, Solution};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws every sheet of the instance, used or not, in sheet order
pub fn solution_to_svgs(
    instance: &Instance,
    solution: &Solution,
    options: SvgDrawOptions,
) -> Vec<Document> {
    (0..instance.sheets().len())
        .map(|sheet_idx| sheet_to_svg(instance, solution, sheet_idx, options))
        .collect()
}

/// Draws a single sheet together with all components placed on it.
/// The sheet's width runs along the x-axis and its length along the y-axis, origin top-left.
pub fn sheet_to_svg(
    instance: &Instance,
    solution: &Solution,
    sheet_idx: usize,
    options: SvgDrawOptions,
) -> Document {
    let sheet = instance.sheet(sheet_idx);
    let tolerance = instance.tolerance();
    let bbox = sheet.bbox();
    let vbox = bbox.scale(1.10);
    let theme = &options.theme;

    let min_dim = f64::min(bbox.width(), bbox.height());
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the sheet
        let label_content = format!(
            "sheet {} | length: {:.1} | width: {:.1} | thickness: {:.1} | density: {:.3}%",
            sheet_idx + 1,
            sheet.length,
            sheet.width,
            sheet.thickness,
            solution.sheet_density(instance, sheet_idx) * 100.0,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set("y", bbox.y_min - 0.5 * 0.025 * min_dim)
            .set("font-size", min_dim * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", format!("sheet_{sheet_idx}"))
        .add(svg_util::data_to_path(
            svg_util::rect_data(&bbox),
            &[
                ("fill", &*format!("{}", theme.sheet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "sheet, id: {}, length: {}, width: {}",
            sheet_idx, sheet.length, sheet.width
        )));

    let mut tolerance_group = Group::new().set("id", "tolerance");
    let mut components_group = Group::new().set("id", "components");
    let mut labels_group = Group::new().set("id", "labels");
    let label_color = svg_util::contrasting_color(theme.component_fill);

    for p in solution.placements_on(sheet_idx) {
        let component = instance.component(p.component_idx);
        let c_bbox = p.bbox(component);

        if options.draw_tolerance && tolerance > 0.0 {
            tolerance_group = tolerance_group.add(svg_util::data_to_path(
                svg_util::rect_data(&p.footprint(component, tolerance)),
                &[
                    ("fill", &*format!("{}", theme.tolerance_fill)),
                    ("fill-opacity", &*format!("{}", theme.tolerance_opac)),
                    ("stroke", "none"),
                ],
            ));
        }

        components_group = components_group.add(
            svg_util::data_to_path(
                svg_util::rect_data(&c_bbox),
                &[
                    ("fill", &*format!("{}", theme.component_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            )
            .set("id", format!("component_{}", p.component_idx))
            .add(Title::new(format!(
                "component, id: {}, width: {}, length: {}, position: ({}, {})",
                p.component_idx, component.width, component.length, p.x, p.y
            ))),
        );

        if options.draw_labels {
            let text = format!("{}mm × {}mm", component.width, component.length);
            // keep the label inside the component, and readable on large sheets
            let font_size = [
                c_bbox.width() / (text.chars().count() as f64 * 0.6),
                c_bbox.height() * 0.5,
                min_dim * 0.04,
            ]
            .into_iter()
            .fold(f64::INFINITY, f64::min);
            let center = c_bbox.centroid();
            labels_group = labels_group.add(
                Text::new(text)
                    .set("x", center.x())
                    .set("y", center.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-size", font_size)
                    .set("font-family", "Arial, sans-serif")
                    .set("font-weight", "bold")
                    .set("fill", &*format!("{label_color}")),
            );
        }
    }

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(sheet_group)
        .add(tolerance_group)
        .add(components_group)
        .add(labels_group)
        .add(label)
}
