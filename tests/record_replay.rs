//! Record-replay round trip through the real binary.
//!
//! 1. Scan a directory with `CLASSCLASH_RECORD` set, capturing every read.
//! 2. Delete the stylesheets.
//! 3. Replay the cassette with `CLASSCLASH_REPLAY` and expect the same report.

use std::path::Path;
use std::process::Command;

use classclash::cassette::format::Cassette;

fn run_with_env(dir: &Path, key: &str, value: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_classclash"))
        .current_dir(dir)
        .env_remove("CLASSCLASH_RECORD")
        .env_remove("CLASSCLASH_REPLAY")
        .env_remove("CLASSCLASH_ROOT")
        .env(key, value)
        .output()
        .expect("failed to run classclash binary")
}

#[test]
fn record_then_replay_produces_identical_report() {
    let dir = std::env::temp_dir().join("classclash_record_replay");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("common.css"), ".btn {} .card {} .card {}").unwrap();
    std::fs::write(dir.join("molotov.css"), ".btn {} .modal {}").unwrap();
    std::fs::write(dir.join("wafer.css"), ".modal {} .btn {}").unwrap();
    let cassette_path = dir.join("cassettes").join("scan.cassette.yaml");

    // --- Record ---
    let recorded = run_with_env(&dir, "CLASSCLASH_RECORD", &cassette_path);
    assert!(recorded.status.success());
    let expected = "Classes in multiple files:\n\
                    .btn: common.css, molotov.css, wafer.css\n\
                    .modal: molotov.css, wafer.css\n";
    assert_eq!(String::from_utf8_lossy(&recorded.stdout), expected);

    let cassette =
        Cassette::from_yaml(&std::fs::read_to_string(&cassette_path).unwrap()).unwrap();
    assert_eq!(cassette.interactions.len(), 4, "one read per configured file");
    assert!(cassette.interactions[2].output.get("err").is_some(), "coifeuer.css is missing");

    // --- Replay without the stylesheets on disk ---
    for name in ["common.css", "molotov.css", "wafer.css"] {
        std::fs::remove_file(dir.join(name)).unwrap();
    }
    let replayed = run_with_env(&dir, "CLASSCLASH_REPLAY", &cassette_path);
    assert!(replayed.status.success());
    assert_eq!(replayed.stdout, recorded.stdout);

    // --- Determinism ---
    let again = run_with_env(&dir, "CLASSCLASH_REPLAY", &cassette_path);
    assert_eq!(again.stdout, replayed.stdout);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_replay_cassette_fails() {
    let dir = std::env::temp_dir().join("classclash_replay_missing");
    std::fs::create_dir_all(&dir).unwrap();

    let output = run_with_env(&dir, "CLASSCLASH_REPLAY", &dir.join("absent.yaml"));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read cassette"));

    let _ = std::fs::remove_dir_all(&dir);
}
