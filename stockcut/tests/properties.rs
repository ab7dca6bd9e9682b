use proptest::prelude::*;
use stockcut::entities::{Component, Instance, Sheet};
use stockcut::io::export::export_instance;
use stockcut::io::ext_repr::{ExtInstance, ExtNumber};
use stockcut::io::import::import;
use stockcut::shelf::{place, place_instance};
use stockcut::util::assertions;

fn sheet_strategy() -> impl Strategy<Value = Sheet> {
    (1.0f64..2000.0, 1.0f64..2000.0, 0.0f64..50.0).prop_map(|(l, w, t)| Sheet::new(l, w, t))
}

fn component_strategy() -> impl Strategy<Value = Component> {
    (0.5f64..800.0, 0.5f64..800.0).prop_map(|(l, w)| Component::new(l, w))
}

fn instance_strategy() -> impl Strategy<Value = Instance> {
    (
        prop::collection::vec(sheet_strategy(), 1..5),
        prop::collection::vec(component_strategy(), 0..80),
        prop_oneof![Just(0.0f64), 0.0f64..25.0],
    )
        .prop_map(|(sheets, components, tolerance)| {
            Instance::new(sheets, components, tolerance).unwrap()
        })
}

proptest! {
    #[test]
    fn placements_stay_within_their_sheet(instance in instance_strategy()) {
        let solution = place_instance(&instance);
        prop_assert!(assertions::sheet_indices_in_range(&instance, &solution));
        prop_assert!(assertions::placements_in_bounds(&instance, &solution));
        for p in &solution.placements {
            let c = instance.component(p.component_idx);
            let s = instance.sheet(p.sheet_idx);
            prop_assert!(p.x >= 0.0 && p.y >= 0.0);
            prop_assert!(p.x + c.width + instance.tolerance() <= s.width);
            prop_assert!(p.y + c.length + instance.tolerance() <= s.length);
        }
    }

    #[test]
    fn placements_never_overlap(instance in instance_strategy()) {
        let solution = place_instance(&instance);
        prop_assert!(assertions::no_overlapping_placements(&instance, &solution));
    }

    #[test]
    fn every_component_is_accounted_for_in_order(instance in instance_strategy()) {
        let solution = place_instance(&instance);
        prop_assert!(assertions::component_order_preserved(&instance, &solution));
        let mut merged = solution
            .placements
            .iter()
            .map(|p| p.component_idx)
            .chain(solution.unplaced.iter().copied())
            .collect::<Vec<_>>();
        merged.sort_unstable();
        prop_assert_eq!(merged, (0..instance.components().len()).collect::<Vec<_>>());
    }

    #[test]
    fn unplaced_components_form_a_suffix(instance in instance_strategy()) {
        let solution = place_instance(&instance);
        prop_assert!(assertions::unplaced_is_suffix(&solution));
        if let Some(&first) = solution.unplaced.first() {
            prop_assert_eq!(
                solution.unplaced.clone(),
                (first..instance.components().len()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn placement_is_deterministic(instance in instance_strategy()) {
        let first = place(instance.sheets(), instance.components(), instance.tolerance()).unwrap();
        let second = place(instance.sheets(), instance.components(), instance.tolerance()).unwrap();
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn persisted_record_round_trips(instance in instance_strategy()) {
        let record = export_instance(&instance);
        let json = serde_json::to_string(&record).unwrap();
        let restored: ExtInstance = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&restored, &record);
        prop_assert_eq!(import(&restored).unwrap(), instance);
    }

    #[test]
    fn numbers_stored_as_text_parse_back(value in 0.001f64..1.0e6) {
        let record = ExtInstance {
            sheets: vec![],
            components: vec![],
            tolerance: ExtNumber::Text(value.to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        let restored: ExtInstance = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(import(&restored).unwrap().tolerance(), value);
    }
}
