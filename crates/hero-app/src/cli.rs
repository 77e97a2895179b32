use std::path::PathBuf;

use clap::Parser;

/// Hero morph: runs the particle text-morph intro headlessly.
#[derive(Parser, Debug)]
#[command(name = "hero-morph", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Words to sample, replacing `[text].words`.
    #[arg(short = 'w', long, num_args = 1..)]
    pub words: Vec<String>,

    /// Number of frames to simulate.
    #[arg(short = 'n', long, default_value_t = 240)]
    pub frames: u32,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Behave as if the user prefers reduced motion.
    #[arg(long)]
    pub reduced_motion: bool,

    /// Pointer position in normalized viewport coordinates, e.g. `0.2,-0.1`.
    #[arg(long, value_parser = parse_pointer, allow_hyphen_values = true)]
    pub pointer: Option<(f32, f32)>,

    /// Write a PNG of the final frame.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

fn parse_pointer(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
        return Err(format!("pointer {x},{y} is outside [-1, 1]"));
    }
    Ok((x, y))
}

pub fn parse() -> Args {
    Args::parse()
}
