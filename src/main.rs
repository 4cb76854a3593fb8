// SPDX-License-Identifier: MPL-2.0
//! Replays a recorded gesture trace and prints the display values after
//! every step.
//!
//! ```text
//! chat_gallery [--config DIR] [--platform ios|android] TRACE.toml
//! ```

use chat_gallery::application::port::GalleryHost;
use chat_gallery::config::{self, Platform};
use chat_gallery::domain::gallery::{HapticStyle, Overlay};
use chat_gallery::error::{Error, Result};
use chat_gallery::gallery::Gallery;
use chat_gallery::trace::Trace;
use std::path::PathBuf;

/// Host that logs every request instead of rendering.
struct LogHost;

impl GalleryHost for LogHost {
    fn trigger_haptic(&mut self, style: HapticStyle) {
        log::info!("haptic: {:?}", style);
    }

    fn set_overlay(&mut self, overlay: Overlay) {
        log::info!("overlay: {:?}", overlay);
    }

    fn selected_index_changed(&mut self, index: usize, count: usize) {
        log::info!("photo {} of {}", index + 1, count);
    }
}

struct Flags {
    config_dir: Option<PathBuf>,
    platform: Option<Platform>,
    trace: PathBuf,
}

fn parse_platform(value: &str) -> std::result::Result<Platform, String> {
    match value {
        "ios" => Ok(Platform::Ios),
        "android" => Ok(Platform::Android),
        other => Err(format!("unknown platform '{other}'")),
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let config_dir = args
        .opt_value_from_str("--config")
        .map_err(|err| Error::Cli(err.to_string()))?;
    let platform = args
        .opt_value_from_fn("--platform", parse_platform)
        .map_err(|err| Error::Cli(err.to_string()))?;
    let trace = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| Error::Cli("missing trace file argument".into()))?;
    Ok(Flags {
        config_dir,
        platform,
        trace,
    })
}

fn run() -> Result<()> {
    let flags = parse_flags(pico_args::Arguments::from_env())?;

    let (config, warning) = config::load_with_override(flags.config_dir);
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }

    let trace = Trace::load(&flags.trace)?;

    let mut tuning = config.tuning();
    if let Some(platform) = flags.platform.or(trace.viewport.platform) {
        tuning.platform = platform;
        if config.gestures.swipe_ratio.is_none() {
            tuning.swipe_ratio = platform.default_swipe_ratio();
        }
    }

    let mut gallery = Gallery::with_tuning(LogHost, trace.viewport.size(), tuning);
    trace.replay(&mut gallery, |index, step, snapshot| {
        println!(
            "#{index:<3} {step:?}\n     translate=({:.1}, {:.1}) scale={:.3} pager={:.1} \
             overlay={:.2} chrome={:.2} photo={}/{} swipe={:?}{}",
            snapshot.translate.x,
            snapshot.translate.y,
            snapshot.scale,
            snapshot.pager_offset,
            snapshot.overlay_opacity,
            snapshot.header_footer_visible,
            snapshot.active_index + 1,
            snapshot.photo_count,
            snapshot.swipe,
            if snapshot.animating { " (animating)" } else { "" },
        );
    });
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_platform_and_trace() {
        let flags = parse_flags(args(&["--platform", "android", "swipe.toml"]))
            .expect("arguments are valid");
        assert_eq!(flags.platform, Some(Platform::Android));
        assert_eq!(flags.trace, PathBuf::from("swipe.toml"));
        assert_eq!(flags.config_dir, None);
    }

    #[test]
    fn unknown_platform_is_an_argument_error() {
        let err = parse_flags(args(&["--platform", "web", "swipe.toml"]))
            .err()
            .expect("platform is rejected");
        assert!(matches!(err, Error::Cli(_)));
    }

    #[test]
    fn missing_trace_is_an_argument_error() {
        let err = parse_flags(args(&[])).err().expect("trace is required");
        assert!(matches!(err, Error::Cli(_)));
        assert_eq!(err.to_string(), "Argument Error: missing trace file argument");
    }
}
