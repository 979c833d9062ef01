use assert_cmd::Command;

fn stdout_of(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("affine3d").unwrap();
    let output = cmd.args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_subcommand_options(){
    let mut cmd = Command::cargo_bin("affine3d").unwrap();
    let output = cmd.output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: affine3d <COMMAND>"), "{}", stderr);
    for line in [
        "sample  Sample random unit vectors, uniformly distributed over the sphere",
        "combo   Compute the iterated affine combination of a starting point with target points",
        "bbox    Compute the axis-aligned bounding box of a point cloud file",
    ] {
        assert!(stderr.contains(line), "missing \"{}\" in:\n{}", line, stderr);
    }
}

#[test]
fn sample_json() {
    let stdout = stdout_of(&["sample", "--count", "16", "--seed", "385", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let vectors = value["vectors"].as_array().unwrap();
    assert_eq!(vectors.len(), 16);
    for v in vectors {
        let (dx, dy, dz) = (v["dx"].as_f64().unwrap(), v["dy"].as_f64().unwrap(), v["dz"].as_f64().unwrap());
        assert!(((dx*dx + dy*dy + dz*dz).sqrt() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn sample_without_seed() {
    let stdout = stdout_of(&["sample", "-f", "obj"]);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("vn "));
}

#[test]
fn combo_obj() {
    let mut cmd = Command::cargo_bin("affine3d").unwrap();
    cmd.args([
        "combo", "--from", "0,0,0",
        "--to", "4,0,0", "--scalar", "0.5",
        "--to", "0,4,0", "--scalar", "0.5",
        "--format", "obj",
    ])
        .assert()
        .success()
        .stdout("v 1 2 0\n");
}

#[test]
fn combo_extrapolates() {
    let mut cmd = Command::cargo_bin("affine3d").unwrap();
    cmd.args(["combo", "--from", "1,1,1", "--to", "2,1,1", "--scalar", "-1", "-f", "obj"])
        .assert()
        .success()
        .stdout("v 0 1 1\n");
}

#[test]
fn combo_rejects_short_point() {
    let mut cmd = Command::cargo_bin("affine3d").unwrap();
    let output = cmd.args(["combo", "--from", "1,2"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Expected 3 components, found 2"), "{}", stderr);
}

#[test]
fn bbox_yaml() {
    let stdout = stdout_of(&["bbox", "--input", "tests/data/points.json"]);
    let value: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(value["count"].as_u64(), Some(3));
    assert_eq!(value["min"]["x"].as_f64(), Some(-1.0));
    assert_eq!(value["min"]["y"].as_f64(), Some(-2.0));
    assert_eq!(value["min"]["z"].as_f64(), Some(1.5));
    assert_eq!(value["max"]["x"].as_f64(), Some(1.0));
    assert_eq!(value["max"]["y"].as_f64(), Some(2.0));
    assert_eq!(value["max"]["z"].as_f64(), Some(4.0));
}

#[test]
fn bbox_missing_file() {
    let mut cmd = Command::cargo_bin("affine3d").unwrap();
    let output = cmd.args(["bbox", "-i", "tests/data/missing.yaml"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("! IO ERROR:"), "{}", stderr);
    assert!(stderr.contains("tests/data/missing.yaml"), "{}", stderr);
}

#[test]
fn bbox_empty_cloud() {
    let mut cmd = Command::cargo_bin("affine3d").unwrap();
    let output = cmd.args(["bbox", "-i", "tests/data/empty.yaml"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("! GEOMETRY ERROR:"), "{}", stderr);
}
