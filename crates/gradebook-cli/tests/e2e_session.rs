//! End-to-end tests: a scripted session against a real roster file.

use gradebook_core::mock::ScriptedConsole;
use gradebook_core::session::{Session, SessionEnd};
use gradebook_core::{FileStore, Grade, RosterStore, WarningKind};
use tempfile::TempDir;

fn run(store: &FileStore, inputs: &[&str]) -> (SessionEnd, ScriptedConsole) {
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    let end = Session::open(store, &mut console).unwrap().run().unwrap();
    (end, console)
}

#[test]
fn sessions_accumulate_across_runs() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("database_siswa.txt"));

    let (end, _) = run(&store, &["3", "B02", "Budi", "3", "A01", "Adi", "5"]);
    assert_eq!(end, SessionEnd::Saved);

    let (_, console) = run(
        &store,
        &["4", "A01", "85", "4", "A01", "85", "4", "B02", "49", "5"],
    );
    assert!(console.said("Loaded 2 student(s)"));

    let roster = store.load().unwrap().roster;
    assert_eq!(roster.get("A01").unwrap().scores, vec![85, 85]);
    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "A01,Adi,85;85\nB02,Budi,49\n"
    );

    let a = gradebook_core::roster::student_detail(&roster, "A01").unwrap();
    assert_eq!(a.stats.grade, Grade::A);
    let b = gradebook_core::roster::student_detail(&roster, "B02").unwrap();
    assert_eq!(b.stats.grade, Grade::E);
}

#[test]
fn tolerant_load_is_normalised_on_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.txt");
    std::fs::write(
        &path,
        "  S02 , Budi ,  60 ; x ; 70 \n\nJUNK\nX01,,\nS02,Budi Baru,75\n",
    )
    .unwrap();
    let store = FileStore::new(&path);

    let report = store.load().unwrap();
    let kinds: Vec<&WarningKind> = report.warnings.iter().map(|w| &w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &WarningKind::BadScoreToken("x".into()),
            &WarningKind::MissingName,
            &WarningKind::DuplicateId("S02".into()),
        ]
    );

    let (end, _) = run(&store, &["5"]);
    assert_eq!(end, SessionEnd::Saved);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "S02,Budi Baru,75\nX01,,\n"
    );
}

#[test]
fn closing_input_keeps_file_as_it_was() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.txt");
    std::fs::write(&path, "S01,Adi,90\n").unwrap();
    let store = FileStore::new(&path);

    let (end, _) = run(&store, &["4", "S01", "10"]);
    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "S01,Adi,90\n");
}
