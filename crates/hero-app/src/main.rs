mod cli;

use std::time::{Duration, Instant};

use hero_common::InteractionEvent;
use hero_config::schema::HeroConfig;
use hero_morph::snapshot::save_snapshot;
use hero_morph::{FrameTimer, HeroMorph, MorphPhase, MotionPreference, SnapshotStyle, TargetCache, TextRaster};
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> (HeroConfig, Option<String>) {
    let loaded = match &args.config {
        Some(path) => hero_config::toml_loader::load_from_path(path),
        None => hero_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (HeroConfig::default(), Some(e.to_string())),
    }
}

fn main() {
    let args = cli::parse();

    // Config is read first so `[logging].level` can seed the filter.
    let (mut config, config_error) = load_config(&args);

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.to_lowercase());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&log_directive)),
        )
        .init();

    tracing::info!("hero-morph v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if !args.words.is_empty() {
        config.text.words = args.words.clone();
    }
    if args.reduced_motion {
        config.motion.reduced_motion = true;
    }

    let motion = MotionPreference::from_config(&config);
    let mut raster = TextRaster::from_config(&config.text);
    let mut cache = TargetCache::new();
    let mut hero = match HeroMorph::mount(&config, &mut raster, &mut cache, motion) {
        Ok(hero) => hero,
        Err(e) => {
            tracing::error!("Mount failed: {e}");
            std::process::exit(1);
        }
    };

    if let Some((x, y)) = args.pointer {
        hero.handle(InteractionEvent::PointerMoved { x, y });
    }

    let fps = args.fps.max(1.0);
    let dt = (1.0 / fps) as f32;
    let mut timer = FrameTimer::for_fps(fps);
    let mut phase = hero.field().phase();
    let mut segments = 0usize;

    for frame in 0..args.frames {
        let start = Instant::now();
        let Some(stats) = hero.frame(dt) else {
            tracing::info!("Reduced motion: static frame, nothing to animate");
            break;
        };
        timer.record(start.elapsed());
        segments = stats.segments;

        let now = hero.field().phase();
        if now != phase {
            tracing::info!(
                frame,
                progress = stats.progress,
                segments = stats.segments,
                "{phase:?} -> {now:?}"
            );
            phase = now;
        }
        if frame % fps as u32 == 0 {
            tracing::debug!(
                frame,
                progress = stats.progress,
                strength = stats.shape_strength,
                segments = stats.segments,
                "frame"
            );
        }
    }

    if timer.sample_count() > 0 {
        tracing::info!(
            avg_ms = timer.frame_time_ms(),
            worst_ms = timer.worst_ms(),
            over_budget = timer.over_budget(),
            budget = ?timer.budget(),
            "Frame timing"
        );
    }
    if let (Some(timeline), true) = (hero.timeline(), phase != MorphPhase::Formed) {
        if motion == MotionPreference::Full {
            tracing::info!(
                "Intro still running after {} frames ({:?} of {:?})",
                args.frames,
                Duration::from_secs_f32(hero.elapsed()),
                Duration::from_secs_f32(timeline.duration())
            );
        }
    }
    tracing::info!(
        particles = hero.field().len(),
        segments,
        phase = ?hero.field().phase(),
        motion = ?motion,
        "Final frame"
    );

    if let Some(path) = &args.snapshot {
        let style = match SnapshotStyle::from_config(&config) {
            Ok(style) => style,
            Err(e) => {
                tracing::warn!("Snapshot colors invalid, using defaults: {e}");
                SnapshotStyle::default()
            }
        };
        if let Err(e) = save_snapshot(hero.field(), &style, path) {
            tracing::error!("{e}");
        }
    }

    hero.teardown();
    tracing::info!("Shutdown complete");
}
