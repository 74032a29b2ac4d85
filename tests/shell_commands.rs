use std::io::Write;
use std::process::{Command, Stdio};

use chess_rules::shell::command::{parse_shell_command, ShellCommand};
use chess_rules::shell::run_shell_with;

fn run_script(script: &str) -> String {
    let mut out = Vec::new();
    run_shell_with(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn parses_click_style_commands() {
    assert_eq!(
        parse_shell_command("moves e2"),
        Some(ShellCommand::Moves(Some("e2".to_string())))
    );
    assert_eq!(
        parse_shell_command("move g1f3"),
        Some(ShellCommand::Play("g1f3".to_string()))
    );
    assert_eq!(
        parse_shell_command("set flip on"),
        Some(ShellCommand::Set {
            name: "flip".to_string(),
            value: Some("on".to_string())
        })
    );
    assert_eq!(parse_shell_command("quit"), Some(ShellCommand::Quit));
}

#[test]
fn scripted_game_ends_in_mate() {
    let out = run_script("f2f3\ne7e5\ng2g4\nd8h4\na2a3\n");
    assert!(out.contains("Checkmate: Black wins"));
    assert!(out.contains("error: Game is over (checkmate)"));
}

#[test]
fn fen_load_and_print() {
    let out = run_script("fen 8/8/8/8/8/8/8/K1k5 w - - 0 1\nfen\n");
    assert!(out.contains("8/8/8/8/8/8/8/K1k5 w - - 0 1"));
    let out = run_script("fen 8/8/8 w - - 0 1\n");
    assert!(out.contains("error:"));
}

#[test]
fn options_change_rendering() {
    let out = run_script("set glyphs off\nshow\n");
    assert!(out.contains("glyphs off"));
    assert!(out.contains("8  r n b q k b n r"));
}

#[test]
fn binary_smoke_test() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn shell binary");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"e2e4\nfen\nquit\n").unwrap();
    drop(stdin);

    let output = child.wait_with_output().expect("shell did not exit");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"));
}
