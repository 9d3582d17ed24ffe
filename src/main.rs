// src/main.rs

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if let Err(e) = benchplot::cli::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
