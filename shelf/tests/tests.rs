#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use log::LevelFilter;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use shelf::config::ShelfConfig;
    use shelf::io;
    use shelf::io::cli::{Cli, run_cli};
    use shelf::io::output::ShelfOutput;
    use shelf::io::store::{JsonFileStore, Store};
    use shelf::run::run;
    use stockcut::util::assertions;

    #[test_case("../assets/cabinet.json", 0; "cabinet")]
    #[test_case("../assets/form_fields.json", 0; "form_fields")]
    #[test_case("../assets/overflow.json", 2; "overflow")]
    #[test_case("../assets/empty.json", 0; "empty")]
    fn test_instance(instance_path: &str, n_unplaced: usize) {
        let _ = env_logger::builder().is_test(true).try_init();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let result = run(ext_instance, &ShelfConfig::default()).unwrap();

        assert!(assertions::solution_is_valid(&result.instance, &result.solution));
        assert_eq!(result.solution.unplaced.len(), n_unplaced);
        assert_eq!(
            result.report.len(),
            result.solution.placements.len() + usize::from(n_unplaced > 0)
        );
        assert_eq!(result.svgs().len(), result.instance.sheets().len());

        let solution = &result.output.solution;
        assert!(solution.density >= 0.0 && solution.density <= 1.0);
        for layout in &solution.layouts {
            assert!(layout.density > 0.0 && layout.density <= 1.0);
        }
    }

    #[test]
    fn form_fields_are_parsed_as_numbers() {
        let ext_instance = io::read_instance(Path::new("../assets/form_fields.json")).unwrap();
        let result = run(ext_instance, &ShelfConfig::default()).unwrap();
        assert!(approx_eq!(f64, result.instance.tolerance(), 2.5));
        assert!(approx_eq!(f64, result.instance.component(1).length, 150.5));
        assert_eq!(result.instance.sheet(0).thickness, 0.0);
        assert_eq!(
            result.report[1],
            "component 2: length 150.5 mm, width 120 mm, position (102.5, 0) on sheet 1"
        );
    }

    #[test]
    fn output_and_store_survive_a_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let ext_instance = io::read_instance(Path::new("../assets/overflow.json")).unwrap();
        let result = run(ext_instance.clone(), &ShelfConfig::default()).unwrap();

        let solution_path = dir.path().join("sol_overflow.json");
        io::write_json(&result.output, &solution_path).unwrap();
        for (i, svg) in result.svgs().iter().enumerate() {
            io::write_svg(svg, &dir.path().join(format!("sol_overflow_{i}.svg"))).unwrap();
        }
        let written: ShelfOutput =
            serde_json::from_str(&fs::read_to_string(&solution_path).unwrap()).unwrap();
        assert_eq!(written.instance, ext_instance);
        assert_eq!(written.solution, result.output.solution);
        assert_eq!(written.config, ShelfConfig::default());
        assert!(dir.path().join("sol_overflow_1.svg").exists());

        let store_path = dir.path().join("store.json");
        let mut store = JsonFileStore::new(&store_path, "stockcut_layout");
        store.save(&result.output.instance).unwrap();
        let reopened = JsonFileStore::new(&store_path, "stockcut_layout");
        let restored = reopened.load().unwrap().unwrap();
        assert_eq!(restored, ext_instance);

        let rerun = run(restored, &ShelfConfig::default()).unwrap();
        assert_eq!(rerun.solution, result.solution);
    }

    fn cli(folder: &Path, input_file: Option<PathBuf>, store_file: &Path) -> Cli {
        Cli {
            input_file,
            solution_folder: folder.to_path_buf(),
            config_file: None,
            store_file: Some(store_file.to_path_buf()),
            log_level: LevelFilter::Off,
        }
    }

    #[test]
    fn cli_falls_back_to_the_stored_instance() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("store.json");

        let first = cli(dir.path(), Some("../assets/cabinet.json".into()), &store_path);
        run_cli(&first).unwrap();
        assert!(dir.path().join("sol_cabinet.json").exists());
        assert!(dir.path().join("sol_cabinet_1.svg").exists());

        let second = cli(dir.path(), None, &store_path);
        run_cli(&second).unwrap();
        let written: ShelfOutput = serde_json::from_str(
            &fs::read_to_string(dir.path().join("sol_stockcut_layout.json")).unwrap(),
        )
        .unwrap();
        let cabinet = io::read_instance(Path::new("../assets/cabinet.json")).unwrap();
        assert_eq!(written.instance, cabinet);
    }

    #[test]
    fn cli_without_input_or_stored_instance_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = cli(dir.path(), None, &dir.path().join("store.json"));
        assert!(run_cli(&args).is_err());
    }

    #[test]
    fn rejected_input_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("store.json");
        run_cli(&cli(dir.path(), Some("../assets/cabinet.json".into()), &store_path)).unwrap();
        let stored = fs::read_to_string(&store_path).unwrap();

        let invalid_path = dir.path().join("invalid.json");
        fs::write(
            &invalid_path,
            r#"{"sheets": [{"length": 100, "width": 100}], "components": [{"length": 10, "width": 10}], "tolerance": "wide"}"#,
        )
        .unwrap();
        assert!(run_cli(&cli(dir.path(), Some(invalid_path), &store_path)).is_err());
        assert_eq!(fs::read_to_string(&store_path).unwrap(), stored);
        assert!(!dir.path().join("sol_invalid.json").exists());
    }

    #[test]
    fn corrupt_store_is_not_read_when_an_input_is_given() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("store.json");
        fs::write(&store_path, "not json").unwrap();

        let with_input = cli(dir.path(), Some("../assets/overflow.json".into()), &store_path);
        run_cli(&with_input).unwrap();
        assert!(dir.path().join("sol_overflow.json").exists());
        assert_eq!(fs::read_to_string(&store_path).unwrap(), "not json");

        let without_input = cli(dir.path(), None, &store_path);
        assert!(run_cli(&without_input).is_err());
    }
}
