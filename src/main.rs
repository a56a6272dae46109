use clap::Parser;
use rusty_magick::cli::Cli;
use rusty_magick::{config, runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
  // clap renders its own usage text; only the exit code is ours (1 for
  // usage errors, 0 for --help/--version).
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      let _ = e.print();
      std::process::exit(if e.use_stderr() { 1 } else { 0 });
    }
  };

  // Load config
  let cfg = match config::load(cli.config.as_deref()) {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("error: {e:#}");
      std::process::exit(1);
    }
  };

  // Initialize tracing
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rusty_magick=info".into()),
    )
    .with(
      tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact(),
    )
    .init();

  if let Err(e) = runner::run(&cli, &cfg) {
    eprintln!("error: {e}");
    std::process::exit(e.exit_code());
  }
}
