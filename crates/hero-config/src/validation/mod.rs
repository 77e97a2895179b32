//! Full configuration validation.
//!
//! Validates numeric ranges, threshold ordering, word lists and color formats.
//! All problems are collected into a single error.

mod helpers;


use crate::schema::HeroConfig;
use hero_common::ConfigError;
use helpers::{validate_color_field, validate_range, validate_range_f64};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HeroConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_text(&mut errors, config);
    validate_particles(&mut errors, config);
    validate_morph(&mut errors, config);
    validate_plexus(&mut errors, config);

    validate_range_f64(
        &mut errors,
        "timeline.duration",
        config.timeline.duration,
        0.1,
        60.0,
    );

    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        errors.push(format!(
            "logging.level = \"{}\" must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_text(errors: &mut Vec<String>, config: &HeroConfig) {
    let text = &config.text;

    if text.words.is_empty() {
        errors.push("text.words must contain at least one word".into());
    }
    if text.words.iter().any(|w| w.trim().is_empty()) {
        errors.push("text.words must not contain empty words".into());
    }
    if text.font_family.trim().is_empty() {
        errors.push("text.font_family must not be empty".into());
    }

    validate_range(errors, "text.font_size", text.font_size, 8, 400);
    validate_range(errors, "text.canvas_width", text.canvas_width, 16, 4096);
    validate_range(errors, "text.canvas_height", text.canvas_height, 16, 4096);
    validate_range(errors, "text.word_spacing", text.word_spacing, 0, 512);
    validate_range(errors, "text.sample_stride", text.sample_stride, 1, 64);
    validate_range(errors, "text.alpha_threshold", text.alpha_threshold, 0, 254);
    validate_range_f64(errors, "text.extent_x", text.extent_x, 0.1, 10.0);
    validate_range_f64(errors, "text.extent_y", text.extent_y, 0.1, 10.0);
}

fn validate_particles(errors: &mut Vec<String>, config: &HeroConfig) {
    let particles = &config.particles;

    validate_range(errors, "particles.count", particles.count, 1, 2000);
    validate_range_f64(
        errors,
        "particles.sphere_radius",
        particles.sphere_radius,
        0.1,
        20.0,
    );
    validate_range_f64(errors, "particles.point_size", particles.point_size, 0.5, 16.0);
    validate_color_field(errors, "particles.point_color", &particles.point_color);
}

fn validate_morph(errors: &mut Vec<String>, config: &HeroConfig) {
    let morph = &config.morph;

    validate_range_f64(errors, "morph.reveal_start", morph.reveal_start, 0.0, 1.0);
    validate_range_f64(errors, "morph.reveal_end", morph.reveal_end, 0.0, 1.0);
    if morph.reveal_start >= morph.reveal_end {
        errors.push(format!(
            "morph.reveal_start ({}) must be less than morph.reveal_end ({})",
            morph.reveal_start, morph.reveal_end
        ));
    }
    validate_range_f64(errors, "morph.rotation_speed", morph.rotation_speed, 0.0, 5.0);

    let interaction = &config.interaction;
    validate_range_f64(errors, "interaction.radius", interaction.radius, 0.0, 5.0);
    validate_range_f64(errors, "interaction.force", interaction.force, 0.0, 5.0);
    validate_range_f64(
        errors,
        "interaction.pointer_extent_x",
        interaction.pointer_extent_x,
        0.1,
        10.0,
    );
    validate_range_f64(
        errors,
        "interaction.pointer_extent_y",
        interaction.pointer_extent_y,
        0.1,
        10.0,
    );
}

fn validate_plexus(errors: &mut Vec<String>, config: &HeroConfig) {
    let plexus = &config.plexus;

    validate_range_f64(errors, "plexus.wide_threshold", plexus.wide_threshold, 0.0, 5.0);
    validate_range_f64(
        errors,
        "plexus.narrow_threshold",
        plexus.narrow_threshold,
        0.0,
        5.0,
    );
    if plexus.narrow_threshold > plexus.wide_threshold {
        errors.push(format!(
            "plexus.narrow_threshold ({}) must not exceed plexus.wide_threshold ({})",
            plexus.narrow_threshold, plexus.wide_threshold
        ));
    }
    validate_range_f64(errors, "plexus.max_alpha", plexus.max_alpha, 0.0, 1.0);
    validate_range_f64(errors, "plexus.min_fade", plexus.min_fade, 0.0, 1.0);
    validate_color_field(errors, "plexus.color", &plexus.color);
}
