use std::process;

fn main() {
    if let Err(e) = ouravocado::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
