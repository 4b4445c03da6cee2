use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture dataset present")
}

#[test]
fn download_caches_dataset_from_source_override() {
    let temp_dir = tempdir().expect("create temp dir");
    let data_dir = temp_dir.path().join("data");

    let mut cmd = cargo_bin_cmd!("azurapi-cli");
    cmd.env("AZURAPI_DATASET_SOURCE", fixtures_dir())
        .env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("download");

    cmd.assert()
        .success()
        .stdout(contains("Dataset available at"))
        .stdout(contains("Ships Version: 5 | Equipments Version: 3"));

    for file in [
        "ships.json",
        "chapters.json",
        "equipments.json",
        "version-info.json",
        "memories.json",
    ] {
        assert!(data_dir.join(file).exists(), "{file} should be cached");
    }
}

#[test]
fn update_records_newer_version() {
    let temp_dir = tempdir().expect("create temp dir");
    for entry in fs::read_dir(fixtures_dir()).expect("read fixtures") {
        let path = entry.expect("fixture entry").path();
        if path.is_file() {
            fs::copy(&path, temp_dir.path().join(path.file_name().unwrap())).expect("copy fixture");
        }
    }

    let mut cmd = cargo_bin_cmd!("azurapi-cli");
    cmd.env("AZURAPI_DATASET_SOURCE", fixtures_dir().join("newer"))
        .env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("update");

    cmd.assert()
        .success()
        .stdout(contains("Newer ships available"))
        .stdout(contains("Ships Version: 6 | Equipments Version: 3"));

    let mut version = cargo_bin_cmd!("azurapi-cli");
    version
        .env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("version");
    version
        .assert()
        .success()
        .stdout(contains("Ships Version: 6"));
}

#[test]
fn missing_dataset_reports_download_hint() {
    let temp_dir = tempdir().expect("create temp dir");

    let mut cmd = cargo_bin_cmd!("azurapi-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("version");

    cmd.assert()
        .failure()
        .stderr(contains("run `download` first"))
        .stderr(contains("ships.json"));
}
