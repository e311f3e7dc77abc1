//! 以子进程方式运行 face-host，检查标准输出只包含表盘画面

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.json");
    Command::new(env!("CARGO_BIN_EXE_face-host"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_stdout_carries_only_frames() {
    let output = run(&["--start", "12:34:56", "--seconds", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let frames: Vec<&str> = stdout.lines().collect();
    assert!(!frames.is_empty());
    for line in &frames {
        assert!(line.contains("s |") && line.ends_with('|'), "意外的输出行: {line}");
    }

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("配置文件不存在"));
}

#[test]
fn test_non_finite_seconds_is_an_error_not_a_panic() {
    let output = run(&["--start", "12:34:56", "--seconds", "inf"]);
    assert!(!output.status.success());
    // panic 退出码为 101，错误返回为 1
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("秒数超出范围"));
}
