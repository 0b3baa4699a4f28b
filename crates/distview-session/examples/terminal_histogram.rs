//! Terminal histogram example
//!
//! Usage: `cargo run -p distview-session --example terminal_histogram -- [uniform|normal] [bins]`
//!
//! Set `RUST_LOG=distview_session=debug` to see session logging.

use distview_core::{Result, SessionConfig};
use distview_histogram::{CumulativeCounts, Histogram};
use distview_sampling::{parse_results, Family, SampleGenerator, SanityRange};
use distview_session::{DistributionSession, Renderer};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const BAR_WIDTH: usize = 50;

/// Draws bars with `#` (or `*` for fetched data) on any writer
struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_histogram(&mut self, histogram: &Histogram, external: bool) -> Result<()> {
        let mark = if external { '*' } else { '#' };
        let max = histogram.max_count().max(1);
        writeln!(self.out, "{histogram}")?;
        for bin in histogram.bins() {
            let bar = mark.to_string().repeat(bin.count * BAR_WIDTH / max);
            writeln!(self.out, "{:>18} | {bar} {}", bin.label(), bin.count)?;
        }
        Ok(())
    }

    fn render_cumulative(&mut self, cumulative: &CumulativeCounts) -> Result<()> {
        writeln!(self.out, "{cumulative}")?;
        let fractions = cumulative.fractions();
        for ((index, running), fraction) in cumulative.points().into_iter().zip(fractions) {
            writeln!(self.out, "{index:>18} | {running:>6} ({:5.1}%)", fraction * 100.0)?;
        }
        Ok(())
    }

    fn clear_cumulative(&mut self) -> Result<()> {
        writeln!(self.out, "(cumulative view off)")?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "distview_session=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let family: Family = args.next().as_deref().unwrap_or("normal").parse()?;
    let bins: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 20,
    };

    let renderer = TerminalRenderer {
        out: io::stdout().lock(),
    };
    let mut session = DistributionSession::new(SessionConfig::default(), renderer)?;

    println!("=== Synthetic {family} sample ===\n");
    println!("{}", session.preview_bin_count(bins));
    session.commit_bin_count()?;
    session.load_synthetic(&SampleGenerator::new().with_seed(42), family)?;
    println!("{}", session.received_label());

    println!("\n=== Cumulative overlay ===\n");
    session.set_cumulative_enabled(true)?;
    session.set_cumulative_enabled(false)?;

    println!("\n=== Fetched sample ===\n");
    let body = r#"{"results": [
        {"value": 12.5}, {"value": 14.0}, {"value": 13.2}, {"value": 480.0},
        {"value": 11.9}, {"value": 15.1}, {"value": 12.8}, {"value": -3.0}
    ]}"#;
    let fetched = parse_results(body, SanityRange::default())?;
    println!("discarded {} readings outside the sanity range", fetched.discarded);
    session.set_bin_count(4)?;
    session.load_fetched(fetched)?;
    println!("{}", session.received_label());

    Ok(())
}
