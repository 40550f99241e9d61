use chrono::{Local, TimeZone};
use logex::{Error, Level, LogEvent, Recorder};

#[test]
fn save_strips_markup() {
    let tmp = tempfile::tempdir().unwrap();
    let mut recorder = Recorder::new(false);
    recorder.append(Level::Error, "<color=#CC0600>Key: a</color> <i>x</i>", None);

    let at = Local.with_ymd_and_hms(2026, 3, 2, 8, 7, 0).unwrap();
    let path = recorder.save_at(tmp.path(), &at).unwrap();

    assert_eq!(path, tmp.path().join("20260302_0807_editor.txt"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "[Error]\nKey: a x\n\n");
}

#[test]
fn save_into_missing_dir_is_refused() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");
    let recorder = Recorder::new(false);

    match recorder.save(&missing) {
        Err(Error::SaveDirMissing(dir)) => assert_eq!(dir, missing),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!missing.exists());
}

#[test]
fn empty_recording_saves_empty_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = Recorder::new(true).save(tmp.path()).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "");
}

#[test]
fn recorded_events_keep_their_stack_trace() {
    let mut recorder = Recorder::new(true);
    recorder.record(&LogEvent::new(Level::Assert, "broken").with_stack_trace("at main"));
    recorder.record(&LogEvent::new(Level::Info, "no trace"));

    assert_eq!(recorder.len(), 2);
    assert_eq!(
        recorder.contents(),
        "[Assert]\nbroken\n\nat main\n[Log]\nno trace\n\n"
    );
}

#[test]
fn stack_traces_are_dropped_when_disabled() {
    let mut recorder = Recorder::new(false);
    recorder.record(&LogEvent::new(Level::Error, "e").with_stack_trace("at main"));
    assert_eq!(recorder.contents(), "[Error]\ne\n\n");
}

#[test]
fn events_without_traces() {
    let mut recorder = Recorder::new(false);
    assert!(recorder.is_empty());
    recorder.record(&LogEvent::new(Level::Debug, "a").with_context("ctx"));
    assert_eq!(recorder.contents(), "[Debug]\na\n\n");
    assert!(!recorder.saves_stack_trace());
}
