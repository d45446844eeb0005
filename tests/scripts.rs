use std::fs;

use novolang::{Interpreter, RunOutcome, interpreter::backend::Backend};
use walkdir::WalkDir;

/// What a script run looks like on disk: printed lines, then the error
/// message if the run failed.
fn transcript(outcome: &RunOutcome) -> Vec<String> {
    let mut lines = outcome.output.clone();
    if let Err(e) = &outcome.result {
        lines.push(e.to_string());
    }
    lines
}

#[test]
fn scripts_match_expected_transcripts() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "nl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });
        let expected: Vec<&str> = expected.lines().collect();

        for &backend in Backend::AVAILABLE {
            count += 1;
            let outcome = Interpreter::new().with_backend(backend).run(&source);
            assert_eq!(transcript(&outcome), expected, "{path:?} on the {backend} backend");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
