use anyhow::ensure;
use clap::Parser;

use mandel_batch::colour;
use mandel_batch::distance;
use mandel_batch::escape::{self, Escape};

/// Probe a single complex point: classify it the way the batch evaluator
/// would, and estimate its distance to the set boundary.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Real part of the point.
    #[arg(allow_hyphen_values = true)]
    x: f64,

    /// Imaginary part of the point.
    #[arg(allow_hyphen_values = true)]
    y: f64,

    /// Iteration budget before the point counts as bounded.
    #[arg(short, long, default_value_t = 1_000_000)]
    iters: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    ensure!(args.x.is_finite(), "x must be finite, got {}", args.x);
    ensure!(args.y.is_finite(), "y must be finite, got {}", args.y);

    match escape::evaluate(args.x, args.y, args.iters) {
        Escape::Bounded => println!("bounded  iters:{}  colour:#000000ff", args.iters),
        escaped @ Escape::Escaped(smooth) => {
            let [r, g, b, a] = colour::rgba(escaped);
            println!("escaped  smooth:{smooth:.4}  colour:#{r:02x}{g:02x}{b:02x}{a:02x}");
        }
    }

    match distance::evaluate(args.x, args.y, args.iters) {
        None => println!("distance: none, treated as interior"),
        Some(sample) => {
            let estimates = sample.estimates();
            println!(
                "distance  it:{:7}  expm1:{:.6e}  classic:{:.6e}  sinh:{:.6e}",
                sample.iterations, estimates.expm1, estimates.classic, estimates.sinh
            );
        }
    }

    Ok(())
}
