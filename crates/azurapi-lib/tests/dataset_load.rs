mod common;

use std::fs;

use azurapi_lib::{load_dataset, AzurApi, DataSource, Document, Error, UpdateStatus};

use common::{fixtures_dir, newer_version_dir, DatasetTestEnv};

#[test]
fn offline_load_reads_all_documents() {
    let env = DatasetTestEnv::new();
    let api = AzurApi::new(true, &env.data_dir).expect("offline load succeeds");

    assert_eq!(api.ships().len(), 6);
    assert_eq!(api.equipments().len(), 3);
    assert_eq!(api.dataset().chapters.len(), 2);
    assert_eq!(api.dataset().memories.len(), 2);
    assert_eq!(api.folder(), env.data_dir.as_path());
}

#[test]
fn memories_are_read_from_their_own_file_in_document_order() {
    let env = DatasetTestEnv::new();
    let dataset = load_dataset(&env.data_dir).expect("dataset loads");
    let names: Vec<&str> = dataset.memories.names().collect();
    assert_eq!(names, vec!["Sakura", "Ironblood"]);
}

#[test]
fn missing_document_fails_construction() {
    let env = DatasetTestEnv::new();
    env.remove(Document::Memories);

    match AzurApi::open(&env.data_dir) {
        Err(Error::DatasetNotFound { path }) => {
            assert_eq!(path, env.path(Document::Memories));
        }
        other => panic!("expected DatasetNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn malformed_document_fails_construction() {
    let env = DatasetTestEnv::new();
    fs::write(env.path(Document::Chapters), "[1, 2").expect("overwrite chapters");

    match AzurApi::open(&env.data_dir) {
        Err(Error::InvalidDocument { document, .. }) => assert_eq!(document, "chapters.json"),
        other => panic!("expected InvalidDocument, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn online_load_caches_every_document() {
    let env = DatasetTestEnv::empty();
    let api = env.fetch_from_fixtures();
    assert_eq!(api.ships().len(), 6);

    for document in Document::ALL {
        let cached = fs::read(env.path(document)).expect("document cached");
        let original = fs::read(fixtures_dir().join(document.file_name())).expect("fixture");
        assert_eq!(cached, original, "{document} should match the source");
    }

    let reopened = AzurApi::open(&env.data_dir).expect("cache loads offline");
    assert_eq!(reopened.dataset(), api.dataset());
}

#[test]
fn online_load_creates_missing_directory() {
    let env = DatasetTestEnv::empty();
    let nested = env.root().join("nested/cache");

    AzurApi::fetch_from(&nested, &DataSource::local(fixtures_dir())).expect("fetch succeeds");
    assert!(nested.join("ships.json").exists());
}

#[test]
fn failed_fetch_writes_nothing() {
    let env = DatasetTestEnv::empty();
    // The newer directory only carries version info, so the ships fetch fails.
    let source = DataSource::local(newer_version_dir());

    let err = AzurApi::fetch_from(&env.data_dir, &source).expect_err("incomplete source");
    assert!(matches!(err, Error::DatasetNotFound { .. }));
    assert!(!env.path(Document::VersionInfo).exists());
}

#[test]
fn refuses_to_overwrite_fixture_dataset() {
    let fixtures = fixtures_dir().canonicalize().expect("fixtures present");
    let err = AzurApi::fetch_from(&fixtures, &DataSource::local(fixtures_dir()))
        .expect_err("fixture dir should be rejected");

    match err {
        Error::ProtectedFixturePath { path } => assert_eq!(path, fixtures),
        other => panic!("expected ProtectedFixturePath error, received: {:?}", other),
    }
}

#[test]
fn update_persists_newer_version_info() {
    let env = DatasetTestEnv::new();
    let mut api = AzurApi::open(&env.data_dir)
        .expect("offline load")
        .with_source(DataSource::local(newer_version_dir()));

    let status = api.update().expect("update succeeds");
    assert_eq!(
        status,
        UpdateStatus::Outdated {
            ships: true,
            equipments: false
        }
    );
    assert_eq!(
        api.version_summary(),
        "Ships Version: 6 | Equipments Version: 3"
    );

    let cached = fs::read(env.path(Document::VersionInfo)).expect("version file");
    let fetched = fs::read(newer_version_dir().join("version-info.json")).expect("newer fixture");
    assert_eq!(cached, fetched, "cached version info should match the source");

    let reopened = AzurApi::open(&env.data_dir).expect("reload");
    assert_eq!(reopened.version(), api.version());

    // Ship data is untouched by a version check.
    assert_eq!(reopened.ships(), api.ships());

    let again = api.update().expect("second update succeeds");
    assert_eq!(again, UpdateStatus::UpToDate);
}

#[test]
fn update_is_a_no_op_when_current() {
    let env = DatasetTestEnv::new();
    let before = fs::read(env.path(Document::VersionInfo)).expect("version file");

    let mut api = AzurApi::open(&env.data_dir)
        .expect("offline load")
        .with_source(DataSource::local(fixtures_dir()));
    assert_eq!(api.update().expect("update succeeds"), UpdateStatus::UpToDate);

    let after = fs::read(env.path(Document::VersionInfo)).expect("version file");
    assert_eq!(before, after);
}

#[test]
fn from_parts_persists_updates_into_its_folder() {
    let env = DatasetTestEnv::new();
    let dataset = load_dataset(&env.data_dir).expect("dataset loads");

    let mut api = AzurApi::from_parts(dataset, &env.data_dir)
        .with_source(DataSource::local(newer_version_dir()));
    assert_eq!(api.folder(), env.data_dir.as_path());
    assert!(api.update().expect("update succeeds").is_outdated());

    let reopened = AzurApi::open(&env.data_dir).expect("reload");
    assert_eq!(
        reopened.version_summary(),
        "Ships Version: 6 | Equipments Version: 3"
    );
}
