use std::path::PathBuf;

use anyhow::Context;
use chromaname::{average, models::Srgb, ColorNamer, Driver, NamerConfig, Sampler, Throttle};
use clap::Parser;
use image::RgbImage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Name the color at the center of an image.
#[derive(Parser)]
#[command(name = "chromaname-probe", version)]
struct Cli {
    /// Image to sample.
    image: PathBuf,

    /// Side of the square block averaged around the center.
    #[arg(long, default_value_t = 1)]
    block: u32,

    /// JSON namer configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name on every this many ticks, overriding the configuration.
    #[arg(long)]
    every: Option<u32>,
}

/// Reads the center block of a still image, as a camera sampler reads the
/// center of each frame.
struct ImageSampler {
    image: RgbImage,
    block: u32,
}

impl Sampler for ImageSampler {
    fn sample(&mut self) -> Option<Srgb> {
        let (width, height) = self.image.dimensions();
        let block_width = self.block.clamp(1, width.max(1));
        let block_height = self.block.clamp(1, height.max(1));
        let left = (width / 2).saturating_sub(block_width / 2);
        let top = (height / 2).saturating_sub(block_height / 2);

        let image = &self.image;
        let pixels = (top..(top + block_height).min(height)).flat_map(|y| {
            (left..(left + block_width).min(width))
                .map(move |x| Srgb::from_rgb8(image.get_pixel(x, y).0))
        });

        average(pixels)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromaname=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NamerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => NamerConfig::default(),
    };
    let namer: ColorNamer = config.build().context("invalid namer config")?;
    let throttle = match cli.every {
        Some(every) => Throttle::new(every),
        None => config.throttle(),
    };

    let image = image::open(&cli.image)
        .with_context(|| format!("failed to open {}", cli.image.display()))?
        .to_rgb8();
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        block = cli.block,
        "sampling image"
    );

    let ticks = throttle.every();
    let mut driver = Driver::new(
        ImageSampler {
            image,
            block: cli.block,
        },
        namer,
    )
    .with_throttle(throttle);

    for tick in 1..=ticks {
        if let Some(reading) = driver.tick() {
            let reading = reading?;
            println!("{}", reading.name);
            println!("  sample    {}", reading.sample);
            println!(
                "  hsv       ({:.1}, {:.3}, {:.3})",
                reading.hsv.hue, reading.hsv.saturation, reading.hsv.value
            );
            if let Some(saturated) = reading.saturated {
                println!("  saturated {}", saturated);
            }
            tracing::debug!(tick, "named sample");
            break;
        }
    }

    Ok(())
}
