use clap::Parser;
use prisma_db_init::{
    logging, report_failure, ConfigLoader, InitError, Initializer, ProjectLayout, Reporter,
    SystemRunner,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generates the Prisma client and creates or updates the local SQLite database.",
    long_about = "Run from the project root or its scripts/ directory. Runs `prisma generate`, then `prisma db push --skip-generate`, and exits non-zero if either fails."
)]
struct Args {
    /// Configuration file. Defaults to db-init.toml in the project root or the user config directory.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level for diagnostics on stderr (overridden by RUST_LOG).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut out = Reporter::new(std::io::stdout().lock());

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(source) => {
            logging::init(&Default::default(), args.log_level.as_deref());
            let err = InitError::Io {
                path: PathBuf::from("."),
                source,
            };
            process::exit(report_failure(&mut out, &err));
        }
    };

    let loader = match ConfigLoader::load(args.config.as_deref(), &cwd) {
        Ok(loader) => loader,
        Err(e) => {
            logging::init(&Default::default(), args.log_level.as_deref());
            process::exit(report_failure(&mut out, &InitError::from(e)));
        }
    };
    let config = loader.config();
    logging::init(&config.logging, args.log_level.as_deref());
    if let Some(ref path) = loader.config_path {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let layout = ProjectLayout::discover(&cwd, config);
    let initializer = Initializer::new(SystemRunner::new(), layout, config);
    let code = initializer.execute(&mut out);
    drop(out);
    process::exit(code);
}
