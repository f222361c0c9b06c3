use std::fs;

use scical::Calculator;
use walkdir::WalkDir;

/// Runs every `tests/scripts/*.calc` file.
///
/// Each non-empty line is `expression => expected display`. Lines starting
/// with `#` are comments and `:mode deg` / `:mode rad` switch the angle mode
/// for the lines that follow.
#[test]
fn script_corpus_matches() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let calc = Calculator::new();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(mode) = line.strip_prefix(":mode ") {
                calc.set_mode(mode.trim());
                continue;
            }

            let Some((expression, expected)) = line.split_once("=>") else {
                panic!("{path:?}:{}: missing '=>' in {line:?}", i + 1);
            };
            let (expression, expected) = (expression.trim(), expected.trim());

            count += 1;
            let actual = calc.calculate(expression);
            if expected.ends_with("...") {
                let prefix = expected.trim_end_matches("...");
                assert!(actual.starts_with(prefix),
                        "{path:?}:{}: {expression} gave {actual:?}, expected it to start with {prefix:?}",
                        i + 1);
            } else {
                assert_eq!(actual, expected, "{path:?}:{}: {expression}", i + 1);
            }
        }
    }

    assert!(count > 0, "No script lines found in tests/scripts");
}
