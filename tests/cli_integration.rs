use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn words_add(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_words_add"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("WORDS_ADD_PROFILE")
        .output()
        .expect("Failed to run words_add")
}

fn words_normalize(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_words_normalize"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run words_normalize")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn read_words(path: &Path) -> Vec<String> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_bootstrap_missing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    let p = path.to_str().unwrap();

    let output = words_add(&[p, "banana", "Apple"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), format!("Added 2 word(s) to {p}"));
    assert_eq!(read_words(&path), vec!["Apple", "banana"]);
}

#[test]
fn test_merge_into_existing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    fs::write(&path, r#"["apple", "cherry"]"#).unwrap();

    let output = words_add(&[path.to_str().unwrap(), "banana"]);

    assert!(output.status.success());
    assert_eq!(read_words(&path), vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_case_variants_kept_apart() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    fs::write(&path, r#"["Apple"]"#).unwrap();

    let output = words_add(&[path.to_str().unwrap(), "apple"]);

    assert!(output.status.success());
    assert_eq!(read_words(&path), vec!["Apple", "apple"]);
}

/// 重複した語も「渡した数」として報告される
#[test]
fn test_count_reports_supplied_words() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    let p = path.to_str().unwrap();
    fs::write(&path, r#"["kiwi"]"#).unwrap();

    let output = words_add(&[p, "kiwi", "kiwi", "lime"]);

    assert!(stdout(&output).contains(&format!("Added 3 word(s) to {p}")));
    assert_eq!(read_words(&path), vec!["kiwi", "lime"]);
}

#[test]
fn test_idempotent_file_content() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    let p = path.to_str().unwrap();

    words_add(&[p, "Zeta", "alpha", "Beta"]);
    let once = fs::read_to_string(&path).unwrap();
    words_add(&[p, "Zeta", "alpha", "Beta"]);
    let twice = fs::read_to_string(&path).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once, "[\n  \"alpha\",\n  \"Beta\",\n  \"Zeta\"\n]");
}

#[test]
fn test_malformed_file_fails_and_is_untouched() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    fs::write(&path, "\"not an array\"").unwrap();

    let output = words_add(&[path.to_str().unwrap(), "banana"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed word list"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "\"not an array\"");
}

#[test]
fn test_only_path_prints_usage() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    fs::write(&path, r#"["b", "a"]"#).unwrap();

    let output = words_add(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage:"));
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"["b", "a"]"#);
}

#[test]
fn test_no_args_prints_usage() {
    let output = words_add(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage:"));
}

#[test]
fn test_write_into_missing_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope").join("words.json");

    let output = words_add(&[path.to_str().unwrap(), "x"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write"));
    assert!(!path.exists());
}

/// 先頭の単語がフラグ風でもマージされる
#[test]
fn test_flag_like_first_word_is_merged() {
    for word in ["--help", "-h", "--version", "--"] {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("w.json");
        let p = path.to_str().unwrap();

        let output = words_add(&[p, word]);

        assert_eq!(output.status.code(), Some(0), "word {word:?}");
        assert_eq!(stdout(&output).trim_end(), format!("Added 1 word(s) to {p}"));
        assert_eq!(read_words(&path), vec![word]);
    }
}

/// 引数 1 個なら --help でも Usage で終了コード 1
#[test]
fn test_lone_help_prints_usage() {
    for flag in ["--help", "--version", "-h"] {
        let output = words_add(&[flag]);
        assert_eq!(output.status.code(), Some(1), "flag {flag:?}");
        assert!(stdout(&output).starts_with("Usage:"));
    }
}

/// ハイフン始まりのパスもそのまま使う
#[test]
fn test_hyphenated_path() {
    let tmp = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_words_add"))
        .current_dir(tmp.path())
        .args(["-x.json", "word"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run words_add");

    assert!(output.status.success());
    assert_eq!(read_words(&tmp.path().join("-x.json")), vec!["word"]);
}

/// UTF-8 でない既存ファイルは失敗し、バイト列も変わらない
#[test]
fn test_unreadable_file_fails_and_is_untouched() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    let bytes = [b'[', b'"', 0xff, b'"', b']'];
    fs::write(&path, bytes).unwrap();

    let output = words_add(&[path.to_str().unwrap(), "banana"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_normalize_rewrites_existing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");
    fs::write(&path, r#"["b","A","b","a"]"#).unwrap();
    let p = path.to_str().unwrap();

    let output = words_normalize(&[p]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), format!("Normalized {p} (3 word(s))"));
    assert_eq!(read_words(&path), vec!["A", "a", "b"]);
}

#[test]
fn test_normalize_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("words.json");

    let output = words_normalize(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(!path.exists());
}
