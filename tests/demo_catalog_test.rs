use clap::Parser;
use container_tour::app::demos;
use container_tour::{catalog, CliConfig, DemoError, DemoRunner, DemoSettings, MenuChoice};
use tempfile::TempDir;

fn settings(dir: &TempDir) -> DemoSettings {
    DemoSettings {
        sleep_ms: 1,
        busy_loop_iterations: 100,
        scratch_file: dir.path().join("example.txt"),
        ..DemoSettings::default()
    }
}

#[test]
fn test_every_menu_code_resolves_to_a_demo() {
    let dir = TempDir::new().unwrap();
    let all = catalog(&settings(&dir));

    for choice in MenuChoice::ALL {
        match choice.demo_name() {
            Some(name) => assert!(demos::find(&all, name).is_ok(), "{} missing", name),
            None => assert_eq!(choice, MenuChoice::Exit),
        }
    }
}

#[test]
fn test_extra_demos_run_by_name() {
    let dir = TempDir::new().unwrap();
    let all = catalog(&settings(&dir));
    let runner = DemoRunner::new();

    let mut output = Vec::new();
    for name in ["containers", "smart-pointer", "ranges"] {
        let demo = demos::find(&all, name).unwrap();
        runner.run(demo, &mut output).unwrap();
    }

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("List after splice: 3 4 5 1 2 "));
    assert!(text.contains("Shared use count: 2"));
    assert!(text.contains("Smart pointer demo completed.\nFile closed.\n"));
    assert!(text.contains("First 5 elements doubled: 2 4 6 8 10 "));
    assert!(dir.path().join("example.txt").exists());
}

#[test]
fn test_unknown_demo_name() {
    let dir = TempDir::new().unwrap();
    let all = catalog(&settings(&dir));

    let err = demos::find(&all, "hashmap").err().unwrap();
    assert!(matches!(err, DemoError::UnknownDemo { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_demo_list_with_typo_runs_nothing() {
    let dir = TempDir::new().unwrap();
    let all = catalog(&settings(&dir));
    let runner = DemoRunner::new();

    let mut output = Vec::new();
    let names = vec!["vector".to_string(), "nope".to_string()];
    let err = runner.run_named(&all, &names, &mut output).unwrap_err();

    assert!(matches!(err, DemoError::UnknownDemo { ref name } if name == "nope"));
    assert_eq!(err.exit_code(), 2);
    assert!(output.is_empty());
}

#[test]
fn test_demo_list_runs_each_in_order() {
    let dir = TempDir::new().unwrap();
    let all = catalog(&settings(&dir));
    let runner = DemoRunner::new();

    let mut output = Vec::new();
    let names = vec!["vector".to_string(), "map".to_string()];
    assert_eq!(runner.run_named(&all, &names, &mut output).unwrap(), 2);

    let text = String::from_utf8(output).unwrap();
    let vector_at = text.find("Vector demo completed.").unwrap();
    let map_at = text.find("=== Map Demo ===").unwrap();
    assert!(vector_at < map_at);
}

#[test]
fn test_catalog_listing() {
    let dir = TempDir::new().unwrap();
    let all = catalog(&settings(&dir));

    let mut output = Vec::new();
    demos::write_catalog(&all, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    let names: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        vec![
            "vector",
            "map",
            "algorithm",
            "container-utils",
            "arithmetic",
            "containers",
            "smart-pointer",
            "ranges"
        ]
    );
}

#[test]
fn test_bad_settings_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tour.toml");
    std::fs::write(&path, "[timing]\nsleep_ms = 999999\n").unwrap();

    let cli = CliConfig::parse_from(["container-tour", "--config", path.to_str().unwrap()]);
    let err = cli.load_settings().unwrap_err();
    assert!(matches!(err, DemoError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 1);
}
