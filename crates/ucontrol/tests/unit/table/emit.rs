//! # Artifact Emission Tests
//!
//! Rendering against the golden artifact, the atomic file write, parsing, and
//! read-back verification.

use std::fs;

use mirfak_ucontrol::GenError;
use mirfak_ucontrol::control::ControlWord;
use mirfak_ucontrol::table::emit::{self, BANNER};
use pretty_assertions::assert_eq;

use crate::common::harness::{GOLDEN, init_tracing, standard_table, temp_destination};

#[test]
fn test_render_matches_golden_artifact() {
    assert_eq!(emit::render(&standard_table(), BANNER), GOLDEN);
}

#[test]
fn test_render_shape() {
    let text = emit::render(&standard_table(), BANNER);
    assert!(text.ends_with('\n'));

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 129);
    assert_eq!(lines[0], "// Mirfak control signals");
    for line in &lines[1..] {
        assert_eq!(line.len(), 32, "{line:?}");
        assert!(line.bytes().all(|b| b == b'0' || b == b'1'), "{line:?}");
    }
}

#[test]
fn test_render_is_deterministic() {
    let table = standard_table();
    assert_eq!(emit::render(&table, BANNER), emit::render(&standard_table(), BANNER));
}

#[test]
fn test_render_matches_streamed_output() {
    let table = standard_table();
    let mut streamed = Vec::new();
    emit::write_to(&table, BANNER, &mut streamed).unwrap();
    assert_eq!(emit::render(&table, BANNER).into_bytes(), streamed);
}

#[test]
fn test_render_uses_custom_banner() {
    let text = emit::render(&standard_table(), "// rom v2");
    assert!(text.starts_with("// rom v2\n"));
    assert_eq!(text.lines().count(), 129);
}

#[test]
fn test_write_then_read_back() {
    init_tracing();
    let table = standard_table();
    let (_dir, path) = temp_destination();

    emit::write_artifact(&table, BANNER, &path, true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), GOLDEN);

    let artifact = emit::read_artifact(&path).unwrap();
    assert_eq!(artifact.banner, BANNER);
    assert_eq!(artifact.words, table.words().collect::<Vec<_>>());
    emit::verify_artifact(&table, BANNER, &path).unwrap();
}

#[test]
fn test_write_replaces_existing_file() {
    let (_dir, path) = temp_destination();
    fs::write(&path, "stale contents\n").unwrap();

    emit::write_artifact(&standard_table(), BANNER, &path, true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), GOLDEN);
}

#[test]
fn test_write_into_missing_directory_fails() {
    let (dir, _) = temp_destination();
    let path = dir.path().join("no_such_dir").join("ucontrol.mem");

    let err = emit::write_artifact(&standard_table(), BANNER, &path, true).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }), "{err:?}");
    assert!(!path.exists());
}

#[test]
fn test_failed_rename_leaves_no_temporary_file() {
    let (dir, _) = temp_destination();
    // A non-empty directory cannot be replaced by a file.
    let path = dir.path().join("occupied");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let err = emit::write_artifact(&standard_table(), BANNER, &path, true).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }), "{err:?}");
    assert!(path.is_dir());

    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("occupied")]);
}

#[test]
fn test_parse_golden() {
    let artifact = emit::parse(GOLDEN).unwrap();
    assert_eq!(artifact.banner, BANNER);
    assert_eq!(artifact.words.len(), 128);
    assert_eq!(artifact.words[127], ControlWord::INVALID);
}

#[test]
fn test_parse_rejects_malformed_text() {
    let no_newline = GOLDEN.trim_end_matches('\n');
    assert!(emit::parse(no_newline).unwrap_err().contains("newline"));

    let no_banner = GOLDEN.replacen("// Mirfak control signals", "Mirfak control signals", 1);
    assert!(emit::parse(&no_banner).unwrap_err().contains("line 1"));

    let short: String = GOLDEN.lines().take(100).map(|l| format!("{l}\n")).collect();
    assert!(emit::parse(&short).unwrap_err().contains("found 99"));

    let mut lines: Vec<&str> = GOLDEN.lines().collect();
    lines[3] = "0000000000000000000000000000002";
    let bad_line = lines.join("\n") + "\n";
    let err = emit::parse(&bad_line).unwrap_err();
    assert!(err.starts_with("line 4:"), "{err}");
}

#[test]
fn test_verify_reports_first_differing_address() {
    let table = standard_table();
    let (_dir, path) = temp_destination();
    emit::write_artifact(&table, BANNER, &path, true).unwrap();

    // Line 5 of the file is ROM address 3.
    let mut lines: Vec<String> = GOLDEN.lines().map(str::to_owned).collect();
    lines[4] = ControlWord::INVALID.to_string();
    fs::write(&path, lines.join("\n") + "\n").unwrap();

    let err = emit::verify_artifact(&table, BANNER, &path).unwrap_err();
    let GenError::Verify { reason, .. } = err else {
        panic!("expected Verify, got {err:?}");
    };
    assert!(reason.starts_with("address 3 holds 1000"), "{reason}");
}

#[test]
fn test_verify_rejects_other_banner() {
    let table = standard_table();
    let (_dir, path) = temp_destination();
    emit::write_artifact(&table, "// other", &path, true).unwrap();

    let err = emit::verify_artifact(&table, BANNER, &path).unwrap_err();
    assert!(err.to_string().contains("banner"), "{err}");
}

#[test]
fn test_read_missing_artifact() {
    let (_dir, path) = temp_destination();
    assert!(matches!(emit::read_artifact(&path), Err(GenError::Io { .. })));
}

#[test]
fn test_failed_read_back_keeps_previous_artifact() {
    let table = standard_table();
    let (dir, path) = temp_destination();
    fs::write(&path, GOLDEN).unwrap();

    // A banner spanning two lines does not parse back as one banner line.
    let err = emit::write_artifact(&table, "// two\n// lines", &path, true).unwrap_err();
    assert!(matches!(err, GenError::Verify { .. }), "{err:?}");
    assert!(err.to_string().contains("ucontrol.mem"), "{err}");

    assert_eq!(fs::read_to_string(&path).unwrap(), GOLDEN);
    let names: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(names, vec![std::ffi::OsString::from("ucontrol.mem")]);
}

#[test]
fn test_unverified_write_skips_read_back() {
    let (_dir, path) = temp_destination();
    emit::write_artifact(&standard_table(), "// two\n// lines", &path, false).unwrap();
    assert!(fs::read_to_string(&path).unwrap().starts_with("// two\n// lines\n"));
}

#[cfg(unix)]
mod permissions {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use mirfak_ucontrol::table::emit::{self, BANNER};
    use rstest::rstest;

    use crate::common::harness::{standard_table, temp_destination};

    fn mode(path: &std::path::Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[rstest]
    #[case(0o644)]
    #[case(0o640)]
    #[case(0o444)]
    fn test_replacement_keeps_destination_mode(#[case] before: u32) {
        let (_dir, path) = temp_destination();
        fs::write(&path, "stale\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(before)).unwrap();

        emit::write_artifact(&standard_table(), BANNER, &path, true).unwrap();
        assert_eq!(mode(&path), before);
    }

    #[test]
    fn test_new_artifact_is_world_readable() {
        let (_dir, path) = temp_destination();
        emit::write_artifact(&standard_table(), BANNER, &path, true).unwrap();
        assert_eq!(mode(&path), 0o644);
    }
}
