//! Subcommand tests against real files in a temp directory.

use std::path::{Path, PathBuf};

use icct_cli::commands::{apply, pick, planes};
use icct_cli::{CliError, parse_step};
use icct_core::color::HexCase;
use icct_core::{Bgra, IcctError, ImageBuffer, io};

/// Write a 4x2 PNG: left half dark red, right half mid grey.
fn write_sample(dir: &Path) -> PathBuf {
    let pixels = (0..8)
        .map(|i| {
            if i % 4 < 2 {
                Bgra::new(10, 20, 200, 255)
            } else {
                Bgra::new(128, 128, 128, 255)
            }
        })
        .collect();
    let image = ImageBuffer::new(4, 2, pixels).unwrap();
    io::save_image(&image, &dir.join("sample.png")).unwrap()
}

#[test]
fn test_apply_writes_filtered_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let steps = vec![parse_step("inverse:255").unwrap()];

    let written = apply::run(&apply::ApplyOptions {
        input: &input,
        output: Some(&dir.path().join("out.png")),
        steps: &steps,
        cumulative: false,
    })
    .unwrap();

    let result = io::load_image(&written).unwrap();
    assert_eq!(result.pixel(0, 0).unwrap(), Bgra::new(245, 235, 55, 255));
    assert_eq!(result.pixel(3, 1).unwrap(), Bgra::new(127, 127, 127, 255));
}

#[test]
fn test_apply_defaults_output_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let written = apply::run(&apply::ApplyOptions {
        input: &input,
        output: None,
        steps: &[],
        cumulative: false,
    })
    .unwrap();

    assert_eq!(written, dir.path().join("sample_filtered.png"));
    assert!(written.exists());
}

#[test]
fn test_cumulative_flag_chains_steps() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let steps = vec![
        parse_step("intensity:10").unwrap(),
        parse_step("intensity:10").unwrap(),
    ];

    let run = |cumulative| {
        let out = dir.path().join(format!("chain-{cumulative}.png"));
        apply::run(&apply::ApplyOptions {
            input: &input,
            output: Some(&out),
            steps: &steps,
            cumulative,
        })
        .unwrap();
        io::load_image(&out).unwrap().pixel(0, 0).unwrap().red()
    };

    assert_eq!(run(false), 210);
    assert_eq!(run(true), 220);
}

#[test]
fn test_non_numeric_slot_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let out = dir.path().join("never.png");
    let steps = vec![parse_step("adjust:bright").unwrap()];

    let err = apply::run(&apply::ApplyOptions {
        input: &input,
        output: Some(&out),
        steps: &steps,
        cumulative: false,
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CliError::Core(IcctError::InvalidParameters { .. })
    ));
    assert!(!out.exists());
}

#[test]
fn test_pick_renders_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let text = pick::run(&pick::PickOptions {
        input: &input,
        x: 1,
        y: 0,
        steps: &[],
        cumulative: false,
        json: false,
        hex_case: HexCase::Upper,
    })
    .unwrap();

    assert!(text.contains("RGB   : 200 020 010"), "{text}");
    assert!(text.contains("HEX   : #C8140AFF"), "{text}");
    assert!(text.contains("Swatch: #c8140a (label #000000)"), "{text}");
}

#[test]
fn test_pick_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let text = pick::run(&pick::PickOptions {
        input: &input,
        x: 2,
        y: 1,
        steps: &[parse_step("greyscale").unwrap()],
        cumulative: false,
        json: true,
        hex_case: HexCase::Lower,
    })
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["hex"], "#808080ff");
    assert_eq!(value["alpha"], 255);
}

#[test]
fn test_pick_json_hex_follows_configured_case() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let pick_hex = |hex_case| {
        let text = pick::run(&pick::PickOptions {
            input: &input,
            x: 0,
            y: 0,
            steps: &[],
            cumulative: false,
            json: true,
            hex_case,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        value["hex"].as_str().unwrap().to_string()
    };

    assert_eq!(pick_hex(HexCase::Upper), "#C8140AFF");
    assert_eq!(pick_hex(HexCase::Lower), "#c8140aff");
}

#[test]
fn test_logging_init_tolerates_existing_subscriber() {
    icct_cli::logging::init("not a valid filter [", 0);
    icct_cli::logging::init("info", 2);
}

#[test]
fn test_pick_outside_image_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let err = pick::run(&pick::PickOptions {
        input: &input,
        x: 4,
        y: 0,
        steps: &[],
        cumulative: false,
        json: false,
        hex_case: HexCase::Upper,
    })
    .unwrap_err();

    assert!(matches!(err, CliError::Core(IcctError::OutOfBounds { .. })));
}

#[test]
fn test_planes_exports_three_greyscale_images() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let out_dir = dir.path().join("planes");

    let written = planes::run(&planes::PlanesOptions {
        input: &input,
        out_dir: &out_dir,
        steps: &[],
        cumulative: false,
    })
    .unwrap();

    assert_eq!(written.len(), 3);
    let red = io::load_image(&out_dir.join("red.png")).unwrap();
    assert_eq!(red.pixel(0, 0).unwrap(), Bgra::new(200, 200, 200, 255));
    let blue = io::load_image(&out_dir.join("blue.png")).unwrap();
    assert_eq!(blue.pixel(0, 0).unwrap(), Bgra::new(10, 10, 10, 255));
}

#[test]
fn test_unreadable_input_is_invalid_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"nope").unwrap();

    let err = apply::run(&apply::ApplyOptions {
        input: &input,
        output: None,
        steps: &[],
        cumulative: false,
    })
    .unwrap_err();

    assert!(matches!(err, CliError::Core(IcctError::InvalidImage { .. })));
}
