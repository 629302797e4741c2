// SPDX-License-Identifier: MPL-2.0
//! Windowless run of the character animation.
//!
//! A single always-on cycler is driven by a tokio timer. Every accepted tick
//! is mapped through the viewport and printed as one line, so the frame
//! sequence and region offsets can be checked from a terminal or a script.

use crate::animation::{timer, CyclerOptions, FrameCycler, Viewport};
use crate::app::config::{self, Config};
use crate::cli::HeadlessArgs;
use crate::domain::animation::{AnimationConfig, FrameIndex};
use crate::error::{Result, SheetError};
use crate::media::{SheetSource, SpriteSheet};
use std::io::Write;
use tokio::sync::mpsc;

/// Resolved settings of one headless run.
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    pub animation: AnimationConfig,
    pub viewport: Viewport,
    pub source: SheetSource,
    pub ticks: u32,
}

impl HeadlessRun {
    /// Applies command-line overrides on top of the character settings.
    pub fn from_config(config: &Config, args: &HeadlessArgs) -> Result<Self> {
        let frames = args
            .frames
            .or(config.character.frame_count)
            .unwrap_or(config::DEFAULT_CHARACTER_FRAMES);
        let fps = args
            .fps
            .or(config.character.fps)
            .unwrap_or(config::DEFAULT_CHARACTER_FPS);
        Ok(Self {
            animation: AnimationConfig::new(frames, fps)?,
            viewport: Viewport::new(config.tile()?),
            source: config.character.source(),
            ticks: args.ticks.unwrap_or(config::DEFAULT_HEADLESS_TICKS),
        })
    }
}

/// Runs `run` to completion on a current-thread runtime, printing to stdout.
pub fn run(run: &HeadlessRun) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(drive(run, &mut out))?;
    Ok(())
}

/// Drives one cycler for `run.ticks` accepted ticks and writes one line per
/// rendered region. Returns the frames that were shown.
pub async fn drive<W: Write>(run: &HeadlessRun, out: &mut W) -> Result<Vec<FrameIndex>> {
    let sheet = SpriteSheet::load(&run.source, run.viewport.tile(), run.animation.frame_count())?;
    let mut cycler: FrameCycler = FrameCycler::new(CyclerOptions::always_on(run.animation));
    let id = cycler.start()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut handle = timer::every(id, cycler.interval(), move |fired| {
        // The receiver only goes away once the run is over.
        let _ = tx.send(fired);
    });

    let mut shown = Vec::new();
    render(out, 0, &run.viewport, &sheet, &run.source, cycler.frame())?;
    shown.push(cycler.frame());

    while shown.len() <= run.ticks as usize {
        let Some(fired) = rx.recv().await else {
            break;
        };
        if let Some(frame) = cycler.tick(fired) {
            render(out, shown.len(), &run.viewport, &sheet, &run.source, frame)?;
            shown.push(frame);
        }
    }

    cycler.teardown();
    timer::cancel(&mut handle);
    out.flush()?;
    log::info!("headless run finished after {} ticks", shown.len() - 1);
    Ok(shown)
}

fn render<W: Write>(
    out: &mut W,
    tick: usize,
    viewport: &Viewport,
    sheet: &SpriteSheet,
    source: &SheetSource,
    frame: FrameIndex,
) -> Result<()> {
    let region = viewport.region(source, frame);
    if sheet.frame(&region).is_none() {
        return Err(SheetError::MissingFrame {
            frame: frame.value(),
            offset_x: region.offset_x,
        }
        .into());
    }
    writeln!(
        out,
        "tick {:>3}  frame {}  x={} y={} {}x{}  {}",
        tick, frame, region.offset_x, region.offset_y, region.width, region.height, source
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animation::{FrameCount, TileSize};
    use crate::domain::error::AnimationError;
    use crate::error::Error;
    use crate::media::BuiltinSheet;
    use std::time::Duration;

    fn headless(frames: i64, ticks: u32) -> HeadlessRun {
        HeadlessRun::from_config(
            &Config::default(),
            &HeadlessArgs {
                ticks: Some(ticks),
                frames: Some(frames),
                fps: None,
            },
        )
        .expect("valid run")
    }

    #[test]
    fn defaults_come_from_character_settings() {
        let run = HeadlessRun::from_config(&Config::default(), &HeadlessArgs::default())
            .expect("valid run");
        assert_eq!(run.animation.frame_count().value(), 7);
        assert_eq!(run.ticks, config::DEFAULT_HEADLESS_TICKS);
        assert_eq!(run.viewport.tile().width(), 64);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let args = HeadlessArgs {
            fps: Some(0.0),
            ..HeadlessArgs::default()
        };
        match HeadlessRun::from_config(&Config::default(), &args) {
            Err(Error::Animation(AnimationError::InvalidFrameRate(_))) => {}
            other => panic!("expected invalid frame rate, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn frames_wrap_around_the_sheet() {
        let run = headless(7, 9);
        let mut out = Vec::new();
        let shown = drive(&run, &mut out).await.expect("run should succeed");

        let values: Vec<u32> = shown.iter().map(|f| f.value()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 0, 1, 2]);

        let text = String::from_utf8(out).expect("utf-8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("x=0 y=0 64x64"));
        assert!(lines[6].contains("x=384 y=0"));
        assert!(lines[7].contains("x=0 y=0"));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_ticks_prints_the_first_frame_only() {
        let run = headless(7, 0);
        let mut out = Vec::new();
        let shown = drive(&run, &mut out).await.expect("run should succeed");
        assert_eq!(shown, vec![FrameIndex::ZERO]);
    }

    #[tokio::test(start_paused = true)]
    async fn huge_tick_count_runs_without_reserving_upfront() {
        let run = headless(7, u32::MAX);
        let mut out = Vec::new();
        let outcome =
            tokio::time::timeout(Duration::from_millis(1060), drive(&run, &mut out)).await;
        assert!(outcome.is_err(), "run should still be going");

        // Frame 0 at start, then one line every 125 ms.

        let text = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn frame_outside_the_sheet_is_a_sheet_error() {
        let source = SheetSource::Builtin(BuiltinSheet::Character);
        let count = FrameCount::new(7).expect("valid count");
        let sheet = SpriteSheet::load(&source, TileSize::default(), count).expect("builtin sheet");
        let larger = FrameCount::new(8).expect("valid count");
        let frame = FrameIndex::new(7, larger).expect("in range");

        let mut out = Vec::new();
        match render(&mut out, 0, &Viewport::default(), &sheet, &source, frame) {
            Err(Error::Sheet(SheetError::MissingFrame { frame, offset_x })) => {
                assert_eq!(frame, 7);
                assert_eq!(offset_x, 448);
            }
            other => panic!("expected a missing frame, got {other:?}"),
        }
        assert!(out.is_empty());
    }
}
