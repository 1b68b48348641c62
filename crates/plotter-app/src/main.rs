//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() -> std::process::ExitCode {
    use std::path::PathBuf;
    use std::process::ExitCode;

    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        eprintln!("usage: plotter <script.json> [output.svg]");
        return ExitCode::from(2);
    };
    let output = args.next().map(PathBuf::from);

    match plotter_app::run(&input, output.as_deref()) {
        Ok(count) => {
            log::info!("Replayed {:?}: {} finalized paths", input, count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to replay {:?}: {}", input, e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
