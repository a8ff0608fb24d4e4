#![forbid(unsafe_code)]

fn main() {
    gutter_core::logging::init();
    match gutter_harness::run_from_env() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(error.exit_code());
        }
    }
}
