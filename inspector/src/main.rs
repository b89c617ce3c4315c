use {
  crate::cli::CliOptions,
  clap::Parser,
  tracing::{debug, subscriber::set_global_default},
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod cli;

fn main() -> anyhow::Result<()> {
  set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  let opts = CliOptions::parse();
  debug!("options: {opts:?}");

  println!("{}", opts.command.execute()?);
  Ok(())
}
