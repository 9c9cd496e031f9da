//! Integration tests for the nettopo-viz binary.
//!
//! These tests run the compiled binary against small GraphML/GEXF fixtures
//! in a temp directory and verify the produced PNG (or the error exit).

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const GRAPHML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="type" attr.type="string"/>
  <key id="d1" for="edge" attr.name="source_type" attr.type="string"/>
  <key id="d2" for="edge" attr.name="target_type" attr.type="string"/>
  <graph id="G" edgedefault="undirected">
    <node id="sw0"><data key="d0">switch</data></node>
    <node id="sw1"><data key="d0">switch</data></node>
    <node id="host0"/>
    <node id="host1"/>
    <edge source="sw0" target="sw1">
      <data key="d1">switch</data>
      <data key="d2">switch</data>
    </edge>
    <edge source="sw0" target="host0"><data key="d1">switch</data></edge>
    <edge source="sw1" target="host1"><data key="d1">switch</data></edge>
  </graph>
</graphml>
"#;

const GEXF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
  <graph defaultedgetype="undirected">
    <attributes class="node">
      <attribute id="0" title="type" type="string"/>
    </attributes>
    <nodes>
      <node id="sw0"><attvalues><attvalue for="0" value="switch"/></attvalues></node>
      <node id="host0"/>
    </nodes>
    <edges>
      <edge source="sw0" target="host0"/>
    </edges>
  </graph>
</gexf>
"#;

/// Get the path to the compiled binary (debug build, built by `cargo test`).
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("nettopo-viz");
    path
}

/// Run the binary with the given arguments.
fn run_binary(args: &[&str]) -> Output {
    let bin = binary_path();
    assert!(
        bin.exists(),
        "Binary not found at {:?}. Run `cargo build` first.",
        bin
    );
    Command::new(&bin)
        .args(args)
        .output()
        .expect("Failed to run binary")
}

fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0x89, b'P', b'N', b'G'])
}

// ─── Success paths ───────────────────────────────────────────────────────────

#[test]
fn test_graphml_input_produces_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cluster.graphml");
    fs::write(&input, GRAPHML).unwrap();

    let output = run_binary(&[input.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let png = dir.path().join("cluster.png");
    assert!(png.exists(), "expected {:?}", png);
    let bytes = fs::read(&png).unwrap();
    assert!(!bytes.is_empty());
    assert!(is_png(&bytes));

    // The binary reports the output path on stdout.
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim().ends_with("cluster.png"));
}

#[test]
fn test_gexf_input_produces_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fabric.gexf");
    fs::write(&input, GEXF).unwrap();

    let output = run_binary(&[input.to_str().unwrap()]);
    assert!(output.status.success());
    let bytes = fs::read(dir.path().join("fabric.png")).unwrap();
    assert!(is_png(&bytes));
}

#[test]
fn test_rerun_overwrites_without_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cluster.graphml");
    fs::write(&input, GRAPHML).unwrap();

    assert!(run_binary(&[input.to_str().unwrap()]).status.success());
    assert!(run_binary(&[input.to_str().unwrap()]).status.success());

    let pngs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .filter(|e| e.path().extension().is_some_and(|x| x == "png"))
        .collect();
    assert_eq!(pngs.len(), 1, "rerun must overwrite, not add a new file");
}

#[test]
fn test_layout_flag_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cluster.graphml");
    fs::write(&input, GRAPHML).unwrap();

    for layout in ["radial", "force", "circular", "random"] {
        let output = run_binary(&["--layout", layout, input.to_str().unwrap()]);
        assert!(output.status.success(), "layout {layout} failed");
    }
}

#[test]
fn test_output_flag_overrides_derived_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cluster.graphml");
    let out = dir.path().join("picture.png");
    fs::write(&input, GRAPHML).unwrap();

    let output = run_binary(&["-o", out.to_str().unwrap(), input.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(out.exists());
    assert!(!dir.path().join("cluster.png").exists());
}

#[test]
fn test_canvas_size_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cluster.graphml");
    fs::write(&input, GRAPHML).unwrap();

    let output = run_binary(&["--width", "200", "--height", "100", input.to_str().unwrap()]);
    assert!(output.status.success());
    let bytes = fs::read(dir.path().join("cluster.png")).unwrap();
    // PNG IHDR: width at offset 16, height at offset 20 (big-endian u32).
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    assert_eq!((width, height), (200, 100));
}

// ─── Failure paths ───────────────────────────────────────────────────────────

#[test]
fn test_no_arguments_is_usage_error() {
    let output = run_binary(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GraphML or GEXF"), "stderr: {stderr}");
}

#[test]
fn test_unknown_extension_is_error_and_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cluster.dot");
    fs::write(&input, "graph G {}").unwrap();

    let output = run_binary(&[input.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown file extension"));
    assert!(stderr.contains("cluster.dot"), "stderr: {stderr}");
    assert!(!dir.path().join("cluster.png").exists());
}

#[test]
fn test_malformed_graphml_is_error_and_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.graphml");
    fs::write(&input, "<graphml><graph><node id=").unwrap();

    let output = run_binary(&[input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!dir.path().join("broken.png").exists());
}

#[test]
fn test_missing_file_is_error() {
    let output = run_binary(&["/nonexistent/net.graphml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"), "stderr: {stderr}");
}
