use maskscan::{load, prepare, render, resolve, CascadeDetector};

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "maskscan")]
#[command(about = "Classifies a still image as mask worn, mask not worn, or face not found")]
struct Cli {
    /// Path to the image file
    image_path: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();

    // Cascade models load before any detection work happens
    let mut face = CascadeDetector::face()?;
    let mut mouth = CascadeDetector::mouth()?;

    let mut image = load(&cli.image_path)?;
    let (gray, binary) = prepare(&image)?;

    let (verdict, label) = resolve(&mut face, &mut mouth, &gray, &binary)?;
    println!("{}", label);

    render::annotate(&mut image, label, verdict.color())?;
    render::show(&image)?;

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::fmt::init();
}
