//! Record-replay round-trip integration test.
//!
//! Proves that the record/replay system works end-to-end:
//! 1. Record a session using `CassetteRecorder` (exercises clock, fs, vcs).
//! 2. Replay the cassette using `ServiceContext::replaying()`.
//! 3. Assert identical outputs between recording and replaying.
//! 4. Replay a second time and assert determinism.

use std::path::Path;

use serde_json::json;

use repocat::cassette::recorder::CassetteRecorder;
use repocat::context::ServiceContext;

/// Exercises the clock, fs, and vcs ports on the given context,
/// returning a snapshot of all outputs for comparison.
fn exercise_ports(ctx: &ServiceContext) -> (String, String, bool, Vec<String>) {
    let time = ctx.clock.now().to_rfc3339();
    let file_content = ctx.fs.read_to_string(Path::new("/project/a.js")).unwrap();
    let exists = ctx.fs.exists(Path::new("/project/sub/c.py"));
    let files = ctx.vcs.list_tracked(Path::new("/project")).unwrap();
    (time, file_content, exists, files)
}

#[test]
fn record_then_replay_produces_identical_outputs() {
    let dir = std::env::temp_dir().join("repocat_record_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("roundtrip.cassette.yaml");

    // --- Phase 1: Record interactions ---
    // We simulate what a recording adapter would capture by manually
    // building a cassette with known interactions for clock, fs, vcs.
    let mut recorder = CassetteRecorder::new(&cassette_path, "roundtrip-test", "abc123");

    // Clock: now()
    recorder.record("clock", "now", json!({}), json!("2025-03-15T14:30:00Z"));

    // FileSystem: read_to_string("/project/a.js")
    recorder.record(
        "fs",
        "read_to_string",
        json!({"path": "/project/a.js"}),
        json!({"ok": "console.log('x');\n"}),
    );

    // FileSystem: exists("/project/sub/c.py")
    recorder.record("fs", "exists", json!({"path": "/project/sub/c.py"}), json!(true));

    // TrackedFileLister: list_tracked("/project")
    recorder.record(
        "vcs",
        "list_tracked",
        json!({"root": "/project"}),
        json!({"ok": ["a.js", "sub/c.py"]}),
    );

    let written_path = recorder.finish().expect("recording should succeed");
    assert_eq!(written_path, cassette_path);

    // Known expected outputs from the recording.
    let expected_time = "2025-03-15T14:30:00+00:00";
    let expected_content = "console.log('x');\n";
    let expected_exists = true;
    let expected_files = vec!["a.js".to_string(), "sub/c.py".to_string()];

    // --- Phase 2: Replay and verify identical outputs ---
    let ctx1 = ServiceContext::replaying(&cassette_path).unwrap();
    let (time1, content1, exists1, files1) = exercise_ports(&ctx1);

    assert_eq!(time1, expected_time, "clock replay mismatch");
    assert_eq!(content1, expected_content, "fs read_to_string replay mismatch");
    assert_eq!(exists1, expected_exists, "fs exists replay mismatch");
    assert_eq!(files1, expected_files, "vcs list_tracked replay mismatch");

    // --- Phase 3: Replay a second time — determinism check ---
    let ctx2 = ServiceContext::replaying(&cassette_path).unwrap();
    let (time2, content2, exists2, files2) = exercise_ports(&ctx2);

    assert_eq!(time1, time2, "determinism: clock outputs differ between replays");
    assert_eq!(content1, content2, "determinism: fs read outputs differ between replays");
    assert_eq!(exists1, exists2, "determinism: fs exists outputs differ between replays");
    assert_eq!(files1, files2, "determinism: vcs outputs differ between replays");

    // Cleanup
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn recorded_session_replays_through_adapters() {
    let base = std::env::temp_dir().join("repocat_record_replay_session");
    let _ = std::fs::remove_dir_all(&base);

    let probe = std::env::temp_dir().join("repocat_record_replay_probe");
    std::fs::create_dir_all(&probe).unwrap();

    // Record a couple of interactions through the real recording adapters.
    let (ctx, session) = ServiceContext::recording_at(base.clone()).unwrap();
    let recorded_time = ctx.clock.now().to_rfc3339();
    let recorded_exists = ctx.fs.exists(&probe);
    drop(ctx);
    let cassette_dir = session.finish().unwrap();

    // Replay the clock cassette and compare.
    let replay = ServiceContext::replaying(&cassette_dir.join("clock.cassette.yaml")).unwrap();
    assert_eq!(replay.clock.now().to_rfc3339(), recorded_time);

    // Replay the fs cassette and compare.
    let replay = ServiceContext::replaying(&cassette_dir.join("fs.cassette.yaml")).unwrap();
    assert_eq!(replay.fs.exists(&probe), recorded_exists);

    let _ = std::fs::remove_dir_all(&base);
    let _ = std::fs::remove_dir_all(&probe);
}
