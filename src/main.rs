fn main() {
    // Delegate to the CLI runner; any failure past this point is fatal.
    if let Err(err) = wave_helper::cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
