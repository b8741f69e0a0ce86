mod common;

use common::{node, trace, write_trace};
use runmeta_viz::chart::{ChartConfig, FixedColorMap};
use runmeta_viz::commands::{execute_visualize, execute_visualize_with, VisualizeArgs};
use runmeta_viz::output::read_event_report;
use runmeta_viz::parser::RunMetadata;
use runmeta_viz::utils::config::MIN_CHART_WIDTH;
use std::path::PathBuf;

fn sample_trace() -> RunMetadata {
    trace(vec![
        ("/device:CPU:0", vec![node("MatMul", 100, 40), node("Relu", 50, 5)]),
        ("/device:GPU:0", vec![node("Conv2D", 200, 90)]),
    ])
}

#[test]
fn test_writes_png_next_to_trace() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), "step_1.pb", &sample_trace());

    let outcome = execute_visualize(VisualizeArgs {
        runmetadata_file: trace_path,
        color_map: Some("viridis".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(outcome.chart_path, dir.path().join("step_1.png"));
    assert_eq!(outcome.rows_plotted, 3);

    let bytes = std::fs::read(&outcome.chart_path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_top_n_and_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), "step_2.pb", &sample_trace());
    let json_path = dir.path().join("reports/step_2.json");

    let outcome = execute_visualize_with(
        VisualizeArgs {
            runmetadata_file: trace_path,
            top_n: Some(2),
            json_output: Some(json_path.clone()),
            ..Default::default()
        },
        &mut FixedColorMap::named("Blues").unwrap(),
    )
    .unwrap();

    assert_eq!(outcome.rows_plotted, 2);
    assert_eq!(outcome.json_path, Some(json_path.clone()));

    let report = read_event_report(&json_path).unwrap();
    assert_eq!(report.events.len(), 3);
    let relu = report.events.iter().find(|e| e.name == "Relu").unwrap();
    assert_eq!(relu.start, 0);
}

#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), "trace.bin", &sample_trace());
    let chart = dir.path().join("out/chart.png");

    let outcome = execute_visualize(VisualizeArgs {
        runmetadata_file: trace_path,
        output: Some(chart.clone()),
        seed: Some(3),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(outcome.chart_path, chart);
    assert!(chart.exists());
}

#[test]
fn test_refuses_to_overwrite_trace() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), "trace.bin", &sample_trace());
    let original = std::fs::read(&trace_path).unwrap();

    let result = execute_visualize(VisualizeArgs {
        runmetadata_file: trace_path.clone(),
        ..Default::default()
    });

    assert!(result.is_err());
    assert_eq!(std::fs::read(&trace_path).unwrap(), original);
}

#[test]
fn test_empty_trace_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), "empty.pb", &RunMetadata::default());

    let err = execute_visualize(VisualizeArgs {
        runmetadata_file: trace_path,
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.to_string().contains("no node stats"));
    assert!(!dir.path().join("empty.png").exists());
}

#[test]
fn test_missing_trace_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = execute_visualize(VisualizeArgs {
        runmetadata_file: dir.path().join("absent.pb"),
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_garbage_trace_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("garbage.pb");
    std::fs::write(&path, [0x0A, 0x05, 0x01]).unwrap();

    let result = execute_visualize(VisualizeArgs {
        runmetadata_file: path,
        ..Default::default()
    });
    assert!(result.is_err());
    assert!(!dir.path().join("garbage.png").exists());
}

#[test]
fn test_large_trace_without_top_n_plots_every_node() {
    let dir = tempfile::tempdir().unwrap();
    let nodes: Vec<_> = (0..5_000)
        .map(|i| node(&format!("layer_{}/MatMul", i), i * 10, 5 + i % 7))
        .collect();
    let trace_path = write_trace(dir.path(), "large.pb", &trace(vec![("/device:CPU:0", nodes)]));

    let outcome = execute_visualize_with(
        VisualizeArgs {
            runmetadata_file: trace_path,
            top_n: None,
            chart_config: ChartConfig::default().with_width(MIN_CHART_WIDTH),
            ..Default::default()
        },
        &mut FixedColorMap::named("magma").unwrap(),
    )
    .unwrap();

    assert_eq!(outcome.rows_plotted, 5_000);
    assert!(outcome.chart_path.exists());
}

#[test]
fn test_minimum_width_with_long_names() {
    let dir = tempfile::tempdir().unwrap();
    let long_name = format!("{}/Conv2D", "gradients/tower_0/block".repeat(4));
    let trace_path = write_trace(
        dir.path(),
        "narrow.pb",
        &trace(vec![("/device:GPU:0", vec![node(&long_name, 0, 50)])]),
    );

    let args = VisualizeArgs {
        runmetadata_file: trace_path,
        chart_config: ChartConfig::default().with_width(MIN_CHART_WIDTH),
        color_map: Some("cividis".to_string()),
        ..Default::default()
    };
    runmeta_viz::commands::validate_args(&args).unwrap();

    let outcome = execute_visualize(args).unwrap();
    assert!(outcome.chart_path.exists());
}
