// SPDX-License-Identifier: MPL-2.0
//! Terminal front-end: plays a story catalog driven by line commands on stdin.

use chrono::Utc;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use story_lens::app::StoriesApp;
use story_lens::config;
use story_lens::error::{Error, Result};
use story_lens::navigation::{Direction, Key, KeyPress, ViewerBounds, ViewerInput};
use story_lens::playback::{CloseReason, GroupProgress};
use story_lens::session::{SessionInput, SessionObserver};
use story_lens::story::age::format_age;
use story_lens::story::{catalog, MediaRef, Story, StoryId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: story_lens [OPTIONS] STORIES.toml

Options:
  --config PATH       Read settings from PATH instead of the user config
  --duration-ms N     Segment duration in milliseconds
  --start N           Open the viewer at story index N
  --group N           Open the viewer at the N-th owner group
  --report            Print the session report as TOML when done
  -h, --help          Show this help

Commands (one per line on stdin):
  n, next             Next story
  p, prev             Previous story
  space, pause        Toggle pause
  tap X               Tap at X percent of the viewer width
  key NAME            Press a key (ArrowLeft, ArrowRight, Escape)
  q, quit             Close the viewer";

/// Width of the virtual viewer `tap` positions are relative to.
const TAP_BOUNDS: ViewerBounds = ViewerBounds {
    left: 0.0,
    top: 0.0,
    width: 100.0,
    height: 100.0,
};

#[derive(Debug)]
struct Args {
    help: bool,
    config: Option<PathBuf>,
    duration_ms: Option<u64>,
    start: Option<usize>,
    group: Option<usize>,
    report: bool,
    catalog: Option<PathBuf>,
}

impl Args {
    fn parse() -> std::result::Result<Self, pico_args::Error> {
        let mut args = pico_args::Arguments::from_env();
        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            config: args.opt_value_from_str("--config")?,
            duration_ms: args.opt_value_from_str("--duration-ms")?,
            start: args.opt_value_from_str("--start")?,
            group: args.opt_value_from_str("--group")?,
            report: args.contains("--report"),
            catalog: args.opt_free_from_str()?,
        };
        let rest = args.finish();
        if !rest.is_empty() {
            tracing::warn!("Ignoring extra arguments: {:?}", rest);
        }
        Ok(parsed)
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("story_lens=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let Some(catalog_path) = args.catalog else {
        eprintln!("{USAGE}");
        return Err(Error::Config("missing story catalog path".to_string()));
    };

    let mut config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if let Some(duration_ms) = args.duration_ms {
        config.segment_duration_ms = Some(duration_ms);
    }
    let settings = config.playback_settings();

    let stories = catalog::load_from_path(&catalog_path)?;
    let base_dir = catalog_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let mut app = StoriesApp::new(stories);
    print_groups(&app);

    let start = match (args.start, args.group) {
        (Some(index), _) => index,
        (None, Some(position)) => app
            .select_group(position)
            .ok_or_else(|| Error::Config(format!("no story group at position {position}")))?,
        (None, None) => 0,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let session = app.open_viewer(start, &settings)?;

    let report = runtime.block_on(async {
        let (inputs, receiver) = tokio::sync::mpsc::unbounded_channel();
        tokio::spawn(read_commands(inputs.clone()));
        let observer = TerminalObserver {
            app: &mut app,
            inputs,
            base_dir,
        };
        session.run(receiver, observer).await
    });
    // Stdin is read on a blocking thread that may never return.
    runtime.shutdown_background();

    println!(
        "\nViewed {} of {} stories",
        app.viewed().len(),
        app.stories().len()
    );
    if args.report {
        println!("{}", report.to_toml()?);
    }
    Ok(())
}

fn print_groups(app: &StoriesApp) {
    let now = Utc::now();
    for (position, group) in app.groups().iter().enumerate() {
        let marker = if group.has_unviewed(app.viewed()) {
            '*'
        } else {
            ' '
        };
        println!(
            "{marker} {position}: {} ({} stories, latest {})",
            group.owner(),
            group.len(),
            format_age(group.most_recent().created_at, now)
        );
    }
}

/// Maps a stdin line to session input. Unknown lines map to nothing.
fn parse_command(line: &str) -> Vec<SessionInput> {
    let mut words = line.split_whitespace();
    let viewer = |input| vec![SessionInput::Viewer(input)];
    match (words.next(), words.next()) {
        (Some("n" | "next"), _) => viewer(ViewerInput::Direction(Direction::Next)),
        (Some("p" | "prev"), _) => viewer(ViewerInput::Direction(Direction::Previous)),
        (Some("space" | "pause"), _) => viewer(ViewerInput::PauseButton),
        (Some("q" | "quit"), _) => viewer(ViewerInput::CloseButton),
        (Some("tap"), Some(x)) => match x.parse::<f32>() {
            Ok(x) => viewer(ViewerInput::PointerRelease {
                x,
                bounds: TAP_BOUNDS,
            }),
            Err(_) => Vec::new(),
        },
        (Some("key"), Some(name)) => {
            let key = Key::from_name(name);
            vec![
                SessionInput::Viewer(ViewerInput::KeyDown(KeyPress::initial(key))),
                SessionInput::Viewer(ViewerInput::KeyUp(key)),
            ]
        }
        _ => Vec::new(),
    }
}

async fn read_commands(inputs: UnboundedSender<SessionInput>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let commands = parse_command(&line);
        if commands.is_empty() && !line.trim().is_empty() {
            tracing::warn!("Unknown command: {}", line.trim());
        }
        for command in commands {
            if inputs.send(command).is_err() {
                return;
            }
        }
    }
    tracing::debug!("Stdin closed; playing on");
}

/// Checks a story's media and reports the result back to the session.
///
/// Remote URLs are taken as ready; local paths must name an existing file,
/// relative ones resolved against the catalog directory.
async fn load_media(
    story: StoryId,
    media: MediaRef,
    base_dir: PathBuf,
    inputs: UnboundedSender<SessionInput>,
) {
    let url = media.url();
    let input = if url.starts_with("http://") || url.starts_with("https://") {
        SessionInput::MediaReady(story)
    } else {
        let path = base_dir.join(url);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => SessionInput::MediaReady(story),
            Ok(_) => {
                tracing::warn!("{} is not a file", path.display());
                SessionInput::MediaFailed(story)
            }
            Err(err) => {
                tracing::warn!("Cannot open {}: {}", path.display(), err);
                SessionInput::MediaFailed(story)
            }
        }
    };
    // Session already gone; nothing to report to.
    let _ = inputs.send(input);
}

struct TerminalObserver<'a> {
    app: &'a mut StoriesApp,
    inputs: UnboundedSender<SessionInput>,
    base_dir: PathBuf,
}

impl SessionObserver for TerminalObserver<'_> {
    fn mark_viewed(&mut self, story: StoryId) {
        self.app.mark_viewed(story);
    }

    fn story_changed(&mut self, story: &Story, index: usize) {
        let kind = if story.media.is_video() {
            "video"
        } else {
            "image"
        };
        println!(
            "\n[{index}] {} ({}) {kind} {}",
            story.owner,
            format_age(story.created_at, Utc::now()),
            story.media.url()
        );
        tokio::spawn(load_media(
            story.id,
            story.media.clone(),
            self.base_dir.clone(),
            self.inputs.clone(),
        ));
    }

    fn progress(&mut self, progress: &GroupProgress) {
        let bars: Vec<String> = progress
            .fills
            .iter()
            .map(|fill| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let filled = (fill * 10.0).round() as usize;
                format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
            })
            .collect();
        let state = if progress.paused { " paused" } else { "" };
        print!("\r{}{state}", bars.join(" "));
        if let Err(err) = std::io::stdout().flush() {
            tracing::debug!("Cannot flush progress line: {}", err);
        }
    }

    fn closed(&mut self, reason: CloseReason) {
        self.app.closed(reason);
        println!("\nViewer closed ({reason:?})");
    }
}
