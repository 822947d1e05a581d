#![forbid(unsafe_code)]

fn main() {
    algoviz::init_tracing();
    if let Err(error) = algoviz::run_from_env() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}
