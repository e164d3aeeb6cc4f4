// src/main.rs

use watchignore::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("watchignore error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let stdout = std::io::stdout();
    run(args, &mut stdout.lock())
}
