fn main() {
    if let Err(e) = chess_rules::shell::run_shell() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
