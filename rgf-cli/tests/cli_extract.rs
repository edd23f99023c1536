use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("rgf-parser")
        .join("samples")
        .join(name)
}

fn extract_into(dir: &TempDir, sample: &str) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("rgf");
    cmd.current_dir(dir.path())
        .arg("extract")
        .arg("--source")
        .arg(sample_path(sample))
        .arg("--out-dir")
        .arg(dir.path().join("data"));
    cmd.assert()
}

#[test]
fn extract_writes_both_modules() {
    let dir = TempDir::new().unwrap();
    extract_into(&dir, "module-01-minimal.bas")
        .success()
        .stdout(predicate::str::contains("Extracted 2 genres and 3 accents."));

    let genres = fs::read_to_string(dir.path().join("data").join("genres.js")).unwrap();
    assert!(genres.starts_with("// Auto-generated from VBA module by rgf extract\n"));
    assert!(genres.contains("export const GENRE_LIBRARY = [\n  {\n    \"name\": \"Street Rap\","));
    assert!(genres.contains("\"tempo\": 140.0,"));
    assert!(genres.ends_with("];\n"));

    let accents = fs::read_to_string(dir.path().join("data").join("accents.js")).unwrap();
    assert!(accents.contains("export const ACCENT_LIBRARY = ["));
    assert!(accents.contains("\"styleTag\": \" accent: london british\""));
}

#[test]
fn check_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("rgf");
    cmd.current_dir(dir.path())
        .arg("extract")
        .arg("--check")
        .arg("--source")
        .arg(sample_path("module-01-minimal.bas"))
        .arg("--out-dir")
        .arg(dir.path().join("data"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 genres and 3 accents."));
    assert!(!dir.path().join("data").exists());
}

#[test]
fn short_genre_row_fails_without_output() {
    let dir = TempDir::new().unwrap();
    extract_into(&dir, "module-03-short-genre.bas")
        .failure()
        .stderr(
            predicate::str::contains("line 6: unexpected genre row length 14 (expected 15)")
                .and(predicate::str::contains("Club Rap")),
        );
    assert!(!dir.path().join("data").exists());
}

#[test]
fn unterminated_string_fails_without_output() {
    let dir = TempDir::new().unwrap();
    extract_into(&dir, "module-04-unterminated.bas")
        .failure()
        .stderr(predicate::str::contains("line 6: unterminated string"));
    assert!(!dir.path().join("data").exists());
}

#[test]
fn missing_source_fails() {
    let dir = TempDir::new().unwrap();
    extract_into(&dir, "no-such-module.bas")
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn set_overrides_export_name() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("rgf");
    cmd.current_dir(dir.path())
        .arg("extract")
        .arg("--source")
        .arg(sample_path("module-01-minimal.bas"))
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--set")
        .arg("extract.accent.export=VOICE_LIBRARY");
    cmd.assert().success();

    let accents = fs::read_to_string(dir.path().join("accents.js")).unwrap();
    assert!(accents.contains("export const VOICE_LIBRARY = ["));
}

#[test]
fn user_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("rgf.toml"),
        format!(
            "[extract]\nsource = {:?}\nout_dir = \"public\"\n\n[extract.genre]\nfile = \"genre-library.js\"\n",
            sample_path("module-01-minimal.bas").display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("rgf");
    cmd.current_dir(dir.path()).arg("extract");
    cmd.assert().success();

    assert!(dir.path().join("public").join("genre-library.js").exists());
    assert!(dir.path().join("public").join("accents.js").exists());
}
