//! Command-line interface for interactive play and headless simulation

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::game::merge::MergeStrategy;
use crate::game::session::GameSession;
use crate::io::configuration::{
    DEFAULT_ASSETS_DIR, DEFAULT_PRESSES, DEFAULT_SEED, RESTING_FRAME_DELAY_MS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::logging::{LogTarget, init_logging};
use crate::io::progress::SimulationProgress;
use crate::io::recording::GifRecorder;
use crate::render::assets::IconSet;
use crate::render::canvas::GridLayout;
use crate::render::terminal::{InputEvent, TerminalUi};

#[derive(Parser, Debug)]
#[command(name = "merge-grid")]
#[command(
    author,
    version,
    about = "Spawn items on a grid and merge matching neighbors"
)]
/// Command-line arguments for the merge game
pub struct Cli {
    /// What to run
    #[command(subcommand)]
    pub command: Command,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and non-error logs
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available modes
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal; any key spawns an item
    Play(PlayArgs),
    /// Press keys automatically and optionally record the session
    Simulate(SimulateArgs),
}

/// Options shared by every mode
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Random seed for reproducible sessions
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory containing the `512/` icon images
    #[arg(short, long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// Check each cell once instead of cascading merges
    #[arg(long)]
    pub single: bool,
}

impl GameArgs {
    /// Merge strategy selected by the flags
    pub const fn strategy(&self) -> MergeStrategy {
        if self.single {
            MergeStrategy::Single
        } else {
            MergeStrategy::Cascade
        }
    }
}

/// Options for interactive play
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Shared game options
    #[command(flatten)]
    pub game: GameArgs,

    /// Record the session as an animated GIF
    #[arg(short, long, value_name = "GIF")]
    pub record: Option<PathBuf>,

    /// Write logs to this file (the terminal is busy with the board)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Options for headless simulation
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Shared game options
    #[command(flatten)]
    pub game: GameArgs,

    /// Number of keypresses to simulate
    #[arg(short, long, default_value_t = DEFAULT_PRESSES)]
    pub presses: usize,

    /// Record every animation frame to an animated GIF
    #[arg(short, long, value_name = "GIF")]
    pub output: Option<PathBuf>,

    /// Save the final board as a PNG image
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,
}

impl SimulateArgs {
    /// Check argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error if no keypress would be simulated or both outputs
    /// point at the same file
    pub fn validate(&self) -> Result<()> {
        if self.presses == 0 {
            return Err(invalid_parameter(
                "presses",
                &self.presses,
                &"at least one keypress is required",
            ));
        }
        if let (Some(output), Some(snapshot)) = (&self.output, &self.snapshot) {
            if output == snapshot {
                return Err(invalid_parameter(
                    "snapshot",
                    &snapshot.display(),
                    &"must differ from the GIF output path",
                ));
            }
        }
        Ok(())
    }
}

impl Cli {
    /// Log destination for the selected mode
    pub fn log_target(&self) -> LogTarget {
        match &self.command {
            Command::Play(args) => args
                .log_file
                .clone()
                .map_or(LogTarget::Disabled, LogTarget::File),
            Command::Simulate(_) => LogTarget::Stderr,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Dispatches the parsed command line to the selected mode
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Install logging and run the selected mode
    ///
    /// # Errors
    ///
    /// Returns an error if logging, the terminal, or any output file fails
    pub fn run(&self) -> Result<()> {
        init_logging(self.cli.verbose, self.cli.quiet, &self.cli.log_target())?;

        match &self.cli.command {
            Command::Play(args) => run_play(args),
            Command::Simulate(args) => {
                let progress = if self.cli.should_show_progress() {
                    SimulationProgress::new(args.presses)
                } else {
                    SimulationProgress::hidden(args.presses)
                };
                let session = run_simulation(args, &progress)?;
                if !self.cli.quiet {
                    print_board(&session);
                }
                Ok(())
            }
        }
    }
}

/// Run a headless session of `args.presses` keypresses
///
/// # Errors
///
/// Returns an error if the arguments are invalid or an output file cannot be
/// written
pub fn run_simulation(args: &SimulateArgs, progress: &SimulationProgress) -> Result<GameSession> {
    args.validate()?;

    let layout = GridLayout::default();
    let icons = if args.output.is_some() || args.snapshot.is_some() {
        IconSet::load(&args.game.assets, layout.icon_size())
    } else {
        IconSet::placeholders(layout.icon_size())
    };

    let mut session = GameSession::new(args.game.seed, args.game.strategy());
    let mut recorder = match &args.output {
        Some(path) => Some(GifRecorder::create(path, icons.clone(), layout)?),
        None => None,
    };

    if let Some(recorder) = recorder.as_mut() {
        recorder.capture_board(session.board(), RESTING_FRAME_DELAY_MS)?;
    }

    for _ in 0..args.presses {
        let report = session.press_key(&mut recorder)?;
        tracing::debug!(
            spawned = report.spawned.is_some(),
            merges = report.merges.len(),
            "keypress handled"
        );

        if let Some(recorder) = recorder.as_mut() {
            recorder.capture_board(session.board(), RESTING_FRAME_DELAY_MS)?;
        }
        progress.advance(session.stats());
    }
    progress.finish(session.stats());
    tracing::info!(
        presses = progress.position(),
        merges = session.stats().merges,
        "simulation finished"
    );

    if let Some(recorder) = recorder {
        let frames = recorder.frames_written();
        let path = recorder.finish()?;
        tracing::info!(path = %path.display(), frames, "session recorded");
    }

    if let Some(path) = &args.snapshot {
        export_board_as_png(session.board(), &icons, layout, path)?;
        tracing::info!(path = %path.display(), "snapshot saved");
    }

    Ok(session)
}

/// Play interactively until the player quits
///
/// # Errors
///
/// Returns an error if the terminal fails or the recording cannot be written
pub fn run_play(args: &PlayArgs) -> Result<()> {
    let layout = GridLayout::default();
    let mut session = GameSession::new(args.game.seed, args.game.strategy());
    let mut recorder = match &args.record {
        Some(path) => {
            let icons = IconSet::load(&args.game.assets, layout.icon_size());
            Some(GifRecorder::create(path, icons, layout)?)
        }
        None => None,
    };

    {
        let mut ui = TerminalUi::enter()?;
        ui.set_status(session.stats());
        ui.draw(session.board(), None)?;
        if let Some(recorder) = recorder.as_mut() {
            recorder.capture_board(session.board(), RESTING_FRAME_DELAY_MS)?;
        }

        while ui.next_input()? == InputEvent::Spawn {
            session.press_key(&mut (&mut ui, &mut recorder))?;

            ui.set_status(session.stats());
            ui.draw(session.board(), None)?;
            if let Some(recorder) = recorder.as_mut() {
                recorder.capture_board(session.board(), RESTING_FRAME_DELAY_MS)?;
            }
        }
    }

    if let Some(recorder) = recorder {
        let path = recorder.finish()?;
        tracing::info!(path = %path.display(), "session recorded");
    }

    print_board(&session);
    Ok(())
}

// Final board summary for the user, printed after the terminal is restored
#[allow(clippy::print_stdout)]
fn print_board(session: &GameSession) {
    let stats = session.stats();
    print!("{}", session.board());
    println!(
        "{} presses, {} merges, best level {}",
        stats.keypresses, stats.merges, stats.highest_level
    );
}
