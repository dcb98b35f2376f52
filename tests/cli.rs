use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mapscriber_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mapscriber").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn mapscriber_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    mapscriber_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Map annotation, geodesic measurement and route planning",
        ));
}

#[test]
fn measure_prints_path_area_and_perimeter() {
    let temp = TempDir::new().unwrap();
    mapscriber_cmd(&temp)
        .args(["measure", "10,10", "10,11", "11,11", "11,10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 329."))
        .stdout(predicate::str::contains("km²"))
        .stdout(predicate::str::contains("Perimeter: 441."));
}

#[test]
fn measure_accepts_negative_latitudes() {
    let temp = TempDir::new().unwrap();
    mapscriber_cmd(&temp)
        .args(["measure", "-33.86,151.21", "-33.87,151.22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 1."))
        .stdout(predicate::str::contains("Area").not());
}

#[test]
fn measure_rejects_bad_points() {
    let temp = TempDir::new().unwrap();
    mapscriber_cmd(&temp)
        .args(["measure", "0,0", "95,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latitude"));
}

#[test]
fn replay_draws_line_and_reports_notices() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    std::fs::write(
        &script,
        r##"[
          {"op": "select", "tool": "line"},
          {"op": "style", "strokeColor": "#ff0000", "lineStyle": "dashed"},
          {"op": "click", "lat": 0, "lng": 0},
          {"op": "click", "lat": 0, "lng": 1},
          {"op": "dblclick", "lat": 0, "lng": 1},
          {"op": "marker-mode"},
          {"op": "click", "lat": 51.5, "lng": -0.09}
        ]"##,
    )
    .unwrap();

    mapscriber_cmd(&temp)
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"line\""))
        .stdout(predicate::str::contains("\"strokeColor\": \"#FF0000\""))
        .stdout(predicate::str::contains("Line completed! Total distance: 111.20 km"))
        .stdout(predicate::str::contains("\"title\": \"Marker 1\""))
        .stdout(predicate::str::contains("\"dashPattern\": ["))
        .stdout(predicate::str::contains("\"label\": \"Distance: 111.20 km\""))
        .stdout(predicate::str::contains("\"attribution\": \"&copy; OpenStreetMap contributors\""));
}

#[test]
fn replay_rejects_malformed_script() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    std::fs::write(&script, r#"[{"op": "fly"}]"#).unwrap();

    mapscriber_cmd(&temp)
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn import_prints_point_markers() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("places.geojson");
    std::fs::write(
        &file,
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-0.09, 51.5]},
             "properties": {"name": "Office"}},
            {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
             "properties": {}}
        ]}"#,
    )
    .unwrap();

    mapscriber_cmd(&temp)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Office\""))
        .stdout(predicate::str::contains("Imported from file"));
}

#[test]
fn import_unknown_extension_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("places.csv");
    std::fs::write(&file, "lat,lng\n1,2\n").unwrap();

    mapscriber_cmd(&temp)
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn init_config_writes_into_config_home() {
    let temp = TempDir::new().unwrap();
    mapscriber_cmd(&temp)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    assert!(temp.path().join("mapscriber").join("config.toml").exists());

    mapscriber_cmd(&temp)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
