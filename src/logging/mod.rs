//! Output control for the command-line front end
//!
//! [`Logger`] handles user-visible output with quiet and verbose modes.
//! Diagnostic events from the library go through `tracing`; [`init_tracing`]
//! installs the subscriber that renders them on stderr.

use crate::registry::ImageTag;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber honouring `RUST_LOG`.
///
/// Without `RUST_LOG` the level is `warn`, or `debug` for this crate when
/// `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,hub_tags=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Logger responsible for all user-visible output
#[derive(Debug, Clone)]
pub struct Logger {
    pub verbose: bool,
    pub quiet: bool,
    pub start_time: Option<Instant>,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            quiet: false,
            start_time: Some(Instant::now()),
        }
    }

    pub fn new_quiet() -> Self {
        Self {
            verbose: false,
            quiet: true,
            start_time: Some(Instant::now()),
        }
    }

    /// Main section heading
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n=== {} ===", title);
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("📝 {}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("✅ {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("⚠️  WARNING: {}", message);
        }
    }

    /// Tag table for one image
    pub fn tags(&self, image: &str, tags: &[ImageTag]) {
        if self.quiet {
            return;
        }

        self.section(image);
        for line in format_tag_rows(tags) {
            println!("  {}", line);
        }
        if tags.is_empty() {
            println!("  (No tags with a digest)");
        }
    }

    /// Key-value pair summary display
    pub fn summary_kv(&self, title: &str, items: &[(&str, String)]) {
        if !self.quiet {
            println!("\n--- {} ---", title);
            for (key, value) in items {
                println!("  {}: {}", key, value);
            }
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|start| start.elapsed()).unwrap_or_default()
    }

    /// Format duration in human-readable format
    pub fn format_duration(&self, duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{}ms", millis)
        } else if millis < 60_000 {
            format!("{:.1}s", duration.as_secs_f64())
        } else {
            let secs = duration.as_secs();
            format!("{}m{}s", secs / 60, secs % 60)
        }
    }
}

/// Aligned `tag  os/arch  digest  timestamp` rows
pub fn format_tag_rows(tags: &[ImageTag]) -> Vec<String> {
    let tag_width = tags.iter().map(|t| t.tag.len()).max().unwrap_or(0);
    let platform_width = tags
        .iter()
        .map(|t| t.os.len() + t.architecture.len() + 1)
        .max()
        .unwrap_or(0);

    tags.iter()
        .map(|t| {
            format!(
                "{:<tag_width$}  {:<platform_width$}  {}  {}",
                t.tag,
                format!("{}/{}", t.os, t.architecture),
                t.digest,
                t.timestamp.to_rfc3339(),
            )
        })
        .collect()
}
