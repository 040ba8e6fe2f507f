use clap::Parser;
use std::path::PathBuf;

use lc_project_setup::{Console, Outcome, ProjectSetup, RestoreMode, Style};

mod logging;

/// Set up the SCP-682 mod workspace: copy game DLLs, restore dotnet tools and
/// generate Plugin/SCP682.csproj.user.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Workspace root holding `UnityProject/` and `Plugin/` (defaults to the current directory).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Game install directory; skips detection.
    #[arg(long)]
    game_dir: Option<PathBuf>,

    /// Unity project directory; skips the default location.
    #[arg(long)]
    project_dir: Option<PathBuf>,

    /// Folder the mod files are copied to after every build; skips the prompt.
    #[arg(long)]
    deploy_dir: Option<PathBuf>,

    /// Do not run `dotnet tool restore`.
    #[arg(long)]
    skip_restore: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Log more (repeat for debug output).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn color_enabled(args: &Args) -> bool {
    !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout)
}

fn build_setup(args: &Args) -> anyhow::Result<ProjectSetup> {
    let root = match &args.root {
        Some(r) => r.clone(),
        None => std::env::current_dir()?,
    };

    let mut setup = ProjectSetup::new(root);
    if let Some(d) = &args.game_dir {
        setup = setup.game_dir(d);
    }
    if let Some(d) = &args.project_dir {
        setup = setup.project_dir(d);
    }
    if let Some(d) = &args.deploy_dir {
        setup = setup.deploy_dir(d);
    }
    if args.skip_restore {
        setup = setup.restore(RestoreMode::Skip);
    }
    Ok(setup)
}

fn run<R, W>(args: &Args, console: &mut Console<R, W>) -> anyhow::Result<Outcome>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let setup = build_setup(args)?;
    Ok(setup.run(console)?)
}

/// Tell the user how the run ended: the unresolved location or the crash details.
fn report<R, W>(
    result: anyhow::Result<Outcome>,
    console: &mut Console<R, W>,
) -> std::io::Result<()>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    match result {
        Ok(Outcome::Completed(done)) => {
            tracing::info!(
                user_file = %done.user_file.display(),
                restored = done.restored,
                "setup complete"
            );
            Ok(())
        }
        Ok(Outcome::Halted(reason)) => console.say(Style::Failure, &reason.message()),
        Err(e) => {
            tracing::error!(error = %e, "setup failed");
            console.say(Style::Failure, "Something went wrong, and the setup crashed!")?;
            console.say(Style::Failure, &format!("The error:\n{e:#}"))?;
            console.say(
                Style::Warning,
                "Make sure you run this from the root of the mod workspace, like so: lc-setup",
            )
        }
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut console = Console::stdio(color_enabled(&args));
    let result = run(&args, &mut console);
    if let Err(e) = report(result, &mut console).and_then(|_| console.pause()) {
        tracing::error!(error = %e, "terminal i/o failed");
    }
}
