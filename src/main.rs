use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use objstore::areas::repository::Repository;
use objstore::artifacts::objects::clock::Clock;
use objstore::commands::session::Session;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "objstore",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "An in-memory, git-like object store",
    long_about = "Runs object store commands against a fresh in-memory repository. \
    Nothing is persisted: every invocation starts from an empty master branch \
    and the repository is gone when the commands have run.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "OBJSTORE_COMMIT_DATE",
        help = "Fixed commit date (RFC 2822 or '%Y-%m-%d %H:%M:%S %z') for reproducible commit ids"
    )]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "run",
        about = "Run a script of commands",
        long_about = "This command runs a script with one command per line. \
        Use '-' to read the script from standard input."
    )]
    Run {
        #[arg(index = 1, help = "Path to the script, or '-' for stdin")]
        script: PathBuf,
        #[command(flatten)]
        options: RunOptions,
    },
    #[command(
        name = "exec",
        about = "Run commands given as arguments",
        long_about = "This command runs each argument as one command line, e.g. \
        objstore exec \"add f1 A\" \"commit first\" \"get f1\""
    )]
    Exec {
        #[arg(index = 1, required = true, num_args = 1.., help = "Command lines to run")]
        commands: Vec<String>,
        #[command(flatten)]
        options: RunOptions,
    },
}

#[derive(Args)]
struct RunOptions {
    #[arg(
        short,
        long,
        help = "Report refused operations and continue instead of stopping at the first one"
    )]
    keep_going: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
    colored::control::set_override(std::io::stderr().is_terminal());

    let cli = Cli::parse();

    let clock = match &cli.date {
        Some(date) => Some(Clock::parse_fixed(date)?),
        None => None,
    };
    let repository = Repository::init(clock.map(|clock| {
        move |repository: &mut Repository<String>| repository.set_clock(clock)
    }));
    let mut session = Session::new(repository, Box::new(std::io::stdout()));

    let (script, options) = match cli.command {
        Commands::Run { script, options } => (read_script(&script)?, options),
        Commands::Exec { commands, options } => (commands.join("\n"), options),
    };

    let failures = session.run_script(&script, options.keep_going)?;
    if failures > 0 {
        anyhow::bail!("{failures} operation(s) refused");
    }

    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("failed to read script from stdin")?;
        return Ok(script);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))
}
