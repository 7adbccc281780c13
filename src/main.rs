use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info, warn};
use videosetter::config;
use videosetter::event::TextEvents;
use videosetter::export::ExportFile;
use videosetter::frame::{FrameSource, StillImageSource, TestPatternSource};
use videosetter::render::{Display, NullDisplay, SnapshotDisplay};
use videosetter::session::{AnnotationSession, SessionOutcome};

fn main() -> ExitCode {
    env_logger::init();

    // Usage: videosetter [FRAME_IMAGE] [--fps N] [--config PATH] [--snapshot PATH]
    // Events are read line by line from stdin (see event::TextEvents).
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut frame_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut snapshot: Option<PathBuf> = None;
    let mut fps = 30.0f64;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = args.get(i).cloned();
            }
            "--snapshot" => {
                i += 1;
                snapshot = args.get(i).map(PathBuf::from);
            }
            "--fps" => {
                i += 1;
                fps = args
                    .get(i)
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(fps);
            }
            other => frame_path = Some(other.to_string()),
        }
        i += 1;
    }

    let config = config::load_config(config_path.as_deref());

    let mut source: Box<dyn FrameSource> = match frame_path {
        Some(path) => Box::new(StillImageSource::new(path, fps)),
        None => {
            info!("no frame supplied; using the built-in test pattern");
            Box::new(TestPatternSource::new(1280, 720, fps))
        }
    };

    let mut session = match AnnotationSession::new(source.as_mut(), config.clone()) {
        Ok(session) => session,
        Err(e) => {
            error!("failed to start session: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let mut events = TextEvents::new(stdin.lock());
    let mut display: Box<dyn Display> = match snapshot {
        Some(path) => Box::new(SnapshotDisplay::new(path)),
        None => Box::new(NullDisplay),
    };

    match session.run(&mut events, display.as_mut()) {
        Ok(SessionOutcome::Completed(model)) => {
            let out = PathBuf::from(&config.export.output_file);
            if let Err(e) = ExportFile::new(model).save(&out) {
                error!("failed to write export: {e}");
                return ExitCode::FAILURE;
            }
            info!("layout written to {}", out.display());
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::Aborted) => {
            warn!("session aborted; nothing exported");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("session failed: {e}");
            ExitCode::FAILURE
        }
    }
}
