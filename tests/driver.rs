use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn slider_search(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slider-search"))
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to launch slider-search")
}

#[test]
fn writes_result_line_for_each_selector() {
    let dir = tempfile::tempdir().unwrap();
    for (selector, expected) in [("1", "L 3 1"), ("2", "L 3 1"), ("3", "L 2 1")] {
        fs::write(
            dir.path().join("input.txt"),
            format!("{}\n3\n1-2-3-4-5-6-7-0-8\n", selector),
        )
        .unwrap();

        let out = slider_search(dir.path(), &["solve", "input.txt"]);
        assert!(out.status.success(), "{:?}", out);
        let line = fs::read_to_string(dir.path().join("output.txt")).unwrap();
        assert_eq!(line, expected);
    }
}

#[test]
fn output_flag_and_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("puzzle.txt"), "bfs\n3\n1-2-3-4-0-5-7-8-6\n").unwrap();
    fs::write(dir.path().join("search.toml"), "output = \"from-config.txt\"\n").unwrap();

    let out = slider_search(
        dir.path(),
        &["solve", "puzzle.txt", "--config", "search.toml"],
    );
    assert!(out.status.success(), "{:?}", out);
    assert_eq!(
        fs::read_to_string(dir.path().join("from-config.txt")).unwrap(),
        "LU 10 2"
    );

    let out = slider_search(dir.path(), &["solve", "puzzle.txt", "-o", "flag.txt"]);
    assert!(out.status.success(), "{:?}", out);
    assert!(dir.path().join("flag.txt").exists());
}

#[test]
fn rejects_bad_input_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [
        "7\n3\n1-2-3-4-5-6-7-0-8\n",
        "3\n3\n1-2-3-4-5-6-7-7-8\n",
        "3\n3\n2-1-3-4-5-6-7-8-0\n",
    ];
    for case in cases {
        fs::write(dir.path().join("input.txt"), case).unwrap();
        let out = slider_search(dir.path(), &["solve", "input.txt"]);
        assert!(!out.status.success(), "accepted {:?}", case);
        assert!(!dir.path().join("output.txt").exists());
    }
}

#[test]
fn ids_depth_cap_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "1\n3\n2-1-3-4-5-6-7-8-0\n").unwrap();
    fs::write(dir.path().join("search.toml"), "precheck_solvable = false\n").unwrap();

    let out = slider_search(
        dir.path(),
        &["solve", "input.txt", "-c", "search.toml", "--max-depth", "6"],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no solution within depth 6"), "{}", stderr);
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn generated_puzzle_is_solvable() {
    let dir = tempfile::tempdir().unwrap();
    let out = slider_search(
        dir.path(),
        &["generate", "--size", "3", "--moves", "8", "--seed", "11", "-a", "2"],
    );
    assert!(out.status.success(), "{:?}", out);

    let text = fs::read_to_string(dir.path().join("input.txt")).unwrap();
    assert!(text.starts_with("2\n3\n"));

    let out = slider_search(dir.path(), &["solve", "input.txt"]);
    assert!(out.status.success(), "{:?}", out);
    let line = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    let fields: Vec<&str> = line.split(' ').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].len().to_string(), fields[2]);
}

#[test]
fn unbounded_ids_on_unreachable_board_terminates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "1\n3\n2-1-3-4-5-6-7-8-0\n").unwrap();
    fs::write(dir.path().join("search.toml"), "precheck_solvable = false\n").unwrap();

    let out = slider_search(dir.path(), &["solve", "input.txt", "-c", "search.toml"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no solution within depth 36"), "{}", stderr);
    assert!(!dir.path().join("output.txt").exists());
}
