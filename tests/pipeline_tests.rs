use newton_render::config::Config;
use newton_render::{run, GridFileError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SMALL_GRID: &str = "3 2 1.50 -1.0 1.0 -1.0 1.0\n1 2 3\n4 5 6\n";

fn write_input(dir: &Path, contents: &str) -> Config {
    let input = dir.join("newton_output.dat");
    fs::write(&input, contents).unwrap();
    let mut config = Config::default();
    config.paths.input = input;
    config.paths.output = dir.join("newton_fractal.png");
    config.display.show = false;
    config
}

fn newton_like_grid(width: usize, height: usize) -> String {
    let mut out = format!("{} {} 12.3456 -0.05 0.05 -0.05 0.05\n", width, height);
    for y in 0..height {
        let row: Vec<String> = (0..width).map(|x| ((x * 7 + y * 13) % 40).to_string()).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

#[test]
fn test_well_formed_input_renders_default_figure() {
    let dir = TempDir::new().unwrap();
    let config = write_input(dir.path(), SMALL_GRID);

    let summary = run(&config).unwrap();
    assert_eq!(summary.header.width, 3);
    assert_eq!(summary.header.height, 2);
    assert_eq!(summary.title, "Fractal de Newton - 3x2 - Tempo: 1.50s");
    assert_eq!(summary.canvas, (1200, 1200));

    let image = image::open(&config.paths.output).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 1200));
}

#[test]
fn test_shape_mismatch_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = write_input(dir.path(), "3 2 1.50 -1.0 1.0 -1.0 1.0\n1 2 3\n");

    let err = run(&config).unwrap_err();
    let grid_err = err.downcast_ref::<GridFileError>().unwrap();
    assert!(grid_err.is_shape_mismatch());
    assert!(!config.paths.output.exists());
}

#[test]
fn test_failed_validation_leaves_previous_output_stale() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(dir.path(), SMALL_GRID);
    config.figure.dpi = 30;
    run(&config).unwrap();
    let before = fs::read(&config.paths.output).unwrap();

    fs::write(&config.paths.input, "3 2 1.50 -1.0 1.0 -1.0 1.0\n1 2\n").unwrap();
    assert!(run(&config).is_err());
    assert_eq!(fs::read(&config.paths.output).unwrap(), before);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(dir.path(), &newton_like_grid(40, 30));
    config.figure.dpi = 60;

    run(&config).unwrap();
    let first = fs::read(&config.paths.output).unwrap();
    run(&config).unwrap();
    let second = fs::read(&config.paths.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_header_parse_failure_is_typed() {
    let dir = TempDir::new().unwrap();
    let config = write_input(dir.path(), "3 2 abc -1.0 1.0 -1.0 1.0\n1 2 3\n4 5 6\n");

    let err = run(&config).unwrap_err();
    match err.downcast_ref::<GridFileError>() {
        Some(GridFileError::InvalidField { field, token }) => {
            assert_eq!(*field, "elapsed");
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!config.paths.output.exists());
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.paths.input = dir.path().join("missing.dat");
    config.paths.output = dir.path().join("out.png");

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GridFileError>(),
        Some(GridFileError::Open { .. })
    ));
}

#[test]
fn test_oversized_canvas_rejected_before_rendering() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(dir.path(), SMALL_GRID);
    config.figure.dpi = 100_000;

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("exceeds"));
    assert!(!config.paths.output.exists());
}

#[test]
fn test_output_into_new_directory() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(dir.path(), &newton_like_grid(8, 8));
    config.paths.output = dir.path().join("figures/newton_fractal.png");
    config.figure.dpi = 20;

    let summary = run(&config).unwrap();
    assert!(summary.output.exists());
    assert_eq!(summary.stats.cells, 64);
}
