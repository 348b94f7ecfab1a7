use anyhow::Result;
use fleet_report::report::{ConsoleRenderer, PlainRenderer, Renderer};
use fleet_report::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() -> Result<()> {
    let app_config = config::AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.level));
    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("starting {}", version::banner());

    let renderer: Box<dyn Renderer> = if app_config.output.use_color() {
        Box::new(ConsoleRenderer::new())
    } else {
        Box::new(PlainRenderer)
    };

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    pipeline::run(stdin, &mut stdout, renderer.as_ref())?;

    Ok(())
}
