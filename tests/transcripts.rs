use std::{fs, path::Path};

use quadcalc::{run_session, session::config::SessionConfig};
use walkdir::WalkDir;

/// Replays every `tests/transcripts/*.in` file and compares the output with
/// the sibling `*.out` file.
#[test]
fn transcripts_replay() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/transcripts");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).sort_by_file_name()
                           .into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "in"))
    {
        let path = entry.path();
        let input =
            fs::read(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        let mut output = Vec::new();
        run_session(input.as_slice(), &mut output, SessionConfig::default().without_prompts())
            .unwrap_or_else(|e| panic!("Transcript {path:?} hit a console error: {e}"));
        let actual = String::from_utf8(output).expect("output is UTF-8");

        count += 1;
        assert_eq!(normalize(&actual), normalize(&expected), "Transcript {path:?} diverged");
    }

    assert!(count > 0, "No transcripts found in {root:?}");
}

fn normalize(text: &str) -> String {
    text.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}
