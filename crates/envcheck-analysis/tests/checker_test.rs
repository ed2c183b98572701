//! Checker tests: directory scans end to end.
//!
//! Covers dialect coverage, ignore rules, classification against the
//! snapshot, fail-fast errors, and the skip-on-parse-error mode.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use envcheck_analysis::checker::{Checker, EnvSnapshot};
use envcheck_core::config::{EnvCheckConfig, ParseErrorPolicy};
use envcheck_core::errors::{CheckError, ParseError, ScanError};
use envcheck_core::events::types::*;
use envcheck_core::events::{CheckEventHandler, NoOpHandler};
use tempfile::TempDir;

// ---- Helpers ----

const BASIC_JS: &str = r#"
const apiKey = process.env.API_KEY;
const url = process.env.BASE_URL;

export const getConfig = () => ({
  apiKey,
  url
});
"#;

const TYPESCRIPT: &str = r#"
interface Config {
  url: string;
  port: number;
}

const apiKey: string = process.env.TS_API_KEY;
const config: Config = {
  url: process.env.TS_BASE_URL,
  port: parseInt(process.env.TS_PORT || "3000")
};

export const getConfig = () => ({
  apiKey,
  ...config
});
"#;

const JSX: &str = r#"
import React from 'react';

const Component = () => {
  const apiUrl = process.env.REACT_API_URL;
  const mode = process.env.REACT_APP_MODE;

  return (
    <div>
      <p>API URL: {apiUrl}</p>
      <p>Mode: {mode}</p>
    </div>
  );
};

export default Component;
"#;

const TSX: &str = r#"
import React from 'react';

interface Props {
  title: string;
}

const TypedComponent: React.FC<Props> = ({ title }) => {
  const apiKey: string = process.env.REACT_APP_API_KEY;
  const debug: boolean = process.env.REACT_APP_DEBUG === 'true';

  return (
    <div>
      <h1>{title}</h1>
      <p>API Key: {apiKey}</p>
      <p>Debug: {debug.toString()}</p>
    </div>
  );
};

export default TypedComponent;
"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn checker() -> Checker {
    Checker::new(EnvCheckConfig::default())
}

fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
    pairs.iter().copied().collect()
}

fn sorted(names: &[String]) -> Vec<String> {
    let mut names = names.to_vec();
    names.sort();
    names
}

/// Event-recording handler for tests that verify event sequences.
#[derive(Default)]
struct RecordingHandler {
    started: RefCell<Vec<ScanStartedEvent>>,
    checked: RefCell<Vec<FileCheckedEvent>>,
    skipped: RefCell<Vec<FileSkippedEvent>>,
    complete: RefCell<Vec<ScanCompleteEvent>>,
}

impl CheckEventHandler for RecordingHandler {
    fn on_scan_started(&self, event: &ScanStartedEvent) {
        self.started.borrow_mut().push(event.clone());
    }
    fn on_file_checked(&self, event: &FileCheckedEvent) {
        self.checked.borrow_mut().push(event.clone());
    }
    fn on_file_skipped(&self, event: &FileSkippedEvent) {
        self.skipped.borrow_mut().push(event.clone());
    }
    fn on_scan_complete(&self, event: &ScanCompleteEvent) {
        self.complete.borrow_mut().push(event.clone());
    }
}

// ---- Classification ----

#[test]
fn missing_is_the_unset_subset_of_found() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config.js", BASIC_JS);

    let result = checker()
        .check(dir.path(), &env(&[("API_KEY", "test-key")]), &NoOpHandler)
        .unwrap();

    assert_eq!(result.found(), ["API_KEY", "BASE_URL"]);
    assert_eq!(result.missing(), ["BASE_URL"]);
    assert!(!result.is_complete());
    assert_eq!(result.root(), Some(dir.path()));
}

#[test]
fn no_env_references_gives_empty_result() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "no-env/config.js",
        "const regular = \"variable\";\nconst obj = { env: \"test\" };\n",
    );

    let result = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap();

    assert!(result.found().is_empty());
    assert!(result.missing().is_empty());
    assert!(result.is_complete());
}

#[test]
fn every_dialect_is_detected() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "ts/config.ts", TYPESCRIPT);
    write(dir.path(), "react/component.jsx", JSX);
    write(dir.path(), "react/typed-component.tsx", TSX);

    let snapshot = env(&[
        ("TS_API_KEY", "k"),
        ("REACT_API_URL", "http://api.example.com"),
        ("REACT_APP_API_KEY", "secret-key"),
    ]);
    let result = checker().check(dir.path(), &snapshot, &NoOpHandler).unwrap();

    assert_eq!(
        sorted(result.found()),
        vec![
            "REACT_API_URL",
            "REACT_APP_API_KEY",
            "REACT_APP_DEBUG",
            "REACT_APP_MODE",
            "TS_API_KEY",
            "TS_BASE_URL",
            "TS_PORT",
        ]
    );
    assert_eq!(
        sorted(result.missing()),
        vec!["REACT_APP_DEBUG", "REACT_APP_MODE", "TS_BASE_URL", "TS_PORT"]
    );
}

#[test]
fn typed_dialect_does_not_suppress_detection() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "plain.js", "const port = process.env.TS_PORT;\n");
    let plain = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap();

    let dir = TempDir::new().unwrap();
    write(dir.path(), "typed.ts", "const port: number = Number(process.env.TS_PORT);\n");
    let typed = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap();

    assert_eq!(plain.found(), typed.found());
    assert_eq!(plain.missing(), typed.missing());
}

#[test]
fn names_shared_across_files_appear_once() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "use(process.env.SHARED, process.env.ONLY_A);");
    write(dir.path(), "nested/deeper/b.ts", "use(process.env.SHARED);");

    let result = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap();

    assert_eq!(sorted(result.found()), vec!["ONLY_A", "SHARED"]);
    assert_eq!(sorted(result.missing()), vec!["ONLY_A", "SHARED"]);
    assert_eq!(result.stats().files_scanned, 2);
}

#[test]
fn rerun_after_setting_missing_changes_only_missing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config.js", BASIC_JS);
    let checker = checker();

    let first = checker
        .check(dir.path(), &env(&[("API_KEY", "x")]), &NoOpHandler)
        .unwrap();
    assert!(!first.is_complete());

    let second = checker
        .check(
            dir.path(),
            &env(&[("API_KEY", "x"), ("BASE_URL", "http://localhost")]),
            &NoOpHandler,
        )
        .unwrap();

    assert_eq!(first.found(), second.found());
    assert!(second.missing().is_empty());
    assert!(second.is_complete());
}

#[test]
fn empty_values_follow_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config.js", BASIC_JS);
    let snapshot = env(&[("API_KEY", ""), ("BASE_URL", "u")]);

    let strict = checker().check(dir.path(), &snapshot, &NoOpHandler).unwrap();
    assert_eq!(strict.missing(), ["API_KEY"]);

    let lenient = Checker::new(EnvCheckConfig::from_toml("[check]\nempty_is_missing = false\n").unwrap())
        .check(dir.path(), &snapshot, &NoOpHandler)
        .unwrap();
    assert!(lenient.is_complete());
}

// ---- Collection and ignore rules ----

#[test]
fn ignored_directory_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".gitignore", "node_modules/\nbuild\n");
    write(dir.path(), "src/index.js", "use(process.env.APP_PORT);");
    write(dir.path(), "node_modules/pkg/index.js", "use(process.env.DEP_SECRET);");
    write(dir.path(), "build/out.js", "use(process.env.BUILD_ONLY);");

    let result = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap();

    assert_eq!(result.found(), ["APP_PORT"]);
    assert_eq!(result.stats().entries_ignored, 2);
}

#[test]
fn ignored_directory_is_not_descended_into() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".gitignore", "vendor/\n");
    // Invalid source under an ignored directory would abort the run if read.
    write(dir.path(), "vendor/broken.js", "const = ;");
    write(dir.path(), "ok.js", "use(process.env.OK);");

    let result = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap();
    assert_eq!(result.found(), ["OK"]);
}

#[test]
fn envcheckignore_and_extra_patterns_apply() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".envcheckignore", "fixtures/\n");
    write(dir.path(), "fixtures/sample.js", "use(process.env.FIXTURE);");
    write(dir.path(), "generated/api.ts", "use(process.env.GENERATED);");
    write(dir.path(), "src/main.ts", "use(process.env.MAIN);");

    let mut config = EnvCheckConfig::default();
    config.scan.extra_ignore = vec!["generated/".to_string()];
    let result = Checker::new(config)
        .check(dir.path(), &env(&[]), &NoOpHandler)
        .unwrap();

    assert_eq!(result.found(), ["MAIN"]);
}

#[test]
fn non_source_files_are_not_parsed() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "README.md", "process.env.IN_DOCS");
    write(dir.path(), "script.py", "os.environ['X']");
    write(dir.path(), "data.json", "{\"process\": {\"env\": 1}}");

    let result = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap();
    assert!(result.found().is_empty());
    assert_eq!(result.stats().files_scanned, 0);
}

#[test]
fn restricting_extensions_to_js_skips_typescript() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "use(process.env.FROM_JS);");
    write(dir.path(), "b.ts", "use(process.env.FROM_TS);");

    let config = EnvCheckConfig::from_toml("[scan]\nextensions = [\".js\"]\n").unwrap();
    let result = Checker::new(config)
        .check(dir.path(), &env(&[]), &NoOpHandler)
        .unwrap();
    assert_eq!(result.found(), ["FROM_JS"]);
}

#[test]
fn oversized_files_are_skipped_and_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "big.js", &format!("use(process.env.BIG);\n{}", "// pad\n".repeat(64)));
    write(dir.path(), "small.js", "use(process.env.SMALL);");

    let config = EnvCheckConfig::from_toml("[scan]\nmax_file_size = 128\n").unwrap();
    let result = Checker::new(config)
        .check(dir.path(), &env(&[]), &NoOpHandler)
        .unwrap();

    assert_eq!(result.found(), ["SMALL"]);
    assert_eq!(result.skipped().len(), 1);
    assert!(result.skipped()[0].path.ends_with("big.js"));
}

// ---- Failure semantics ----

#[test]
fn missing_root_aborts_with_scan_error() {
    let dir = TempDir::new().unwrap();
    let err = checker()
        .check(&dir.path().join("does-not-exist"), &env(&[]), &NoOpHandler)
        .unwrap_err();
    assert!(matches!(err, CheckError::Scan(ScanError::Io { .. })));
}

#[test]
fn parse_error_aborts_by_default() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "good.js", "use(process.env.GOOD);");
    write(dir.path(), "bad.js", "const = process.env.BAD;");

    let err = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap_err();
    match err {
        CheckError::Parse(ParseError::Syntax { path, line, .. }) => {
            assert!(path.ends_with("bad.js"));
            assert_eq!(line, 1);
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn invalid_utf8_is_unsupported_encoding() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("latin1.js"), b"const s = '\xe9';").unwrap();

    let err = checker().check(dir.path(), &env(&[]), &NoOpHandler).unwrap_err();
    assert!(matches!(
        err,
        CheckError::Scan(ScanError::UnsupportedEncoding { .. })
    ));
}

#[test]
fn skip_policy_records_unparsable_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "good.js", "use(process.env.GOOD);");
    write(dir.path(), "bad.js", "const = process.env.BAD;");

    let mut config = EnvCheckConfig::default();
    config.check.on_parse_error = Some(ParseErrorPolicy::Skip);
    let handler = RecordingHandler::default();
    let result = Checker::new(config)
        .check(dir.path(), &env(&[]), &handler)
        .unwrap();

    assert_eq!(result.found(), ["GOOD"]);
    assert_eq!(result.skipped().len(), 1);
    assert!(result.skipped()[0].path.ends_with("bad.js"));
    assert_eq!(result.stats().files_scanned, 1);
    assert_eq!(handler.skipped.borrow().len(), 1);
}

// ---- Events ----

#[test]
fn events_follow_the_run() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "use(process.env.A, process.env.A);");
    write(dir.path(), "b.tsx", "const el = <p>{process.env.B}</p>;");

    let handler = RecordingHandler::default();
    checker()
        .check(dir.path(), &env(&[("A", "1")]), &handler)
        .unwrap();

    let started = handler.started.borrow();
    assert_eq!(started.len(), 1);
    assert_eq!(started[0].file_count, 2);

    let checked = handler.checked.borrow();
    assert_eq!(checked.len(), 2);
    assert!(checked.iter().all(|e| e.names == 1));

    let complete = handler.complete.borrow();
    assert_eq!(complete.len(), 1);
    assert_eq!(complete[0].found, 2);
    assert_eq!(complete[0].missing, 1);
}
