// src/main.rs

use anyhow::Context;
use log::{debug, info};

use lgw::color::{self, ACTIVE_FORMAT_NAME};
use lgw::config::{Config, CONFIG};
use lgw::{DynamicBuffer, PixelBuffer};

/// Fills `buffer` with a horizontal gray ramp and a white diagonal.
fn draw_test_pattern(buffer: &mut DynamicBuffer) {
    let (width, height) = (buffer.width(), buffer.height());
    let span = width.saturating_sub(1).max(1);
    for y in 0..height {
        for x in 0..width {
            let level = (x * 255 / span) as u8;
            buffer.draw(x, y, color::gray(level));
        }
    }
    for i in 0..width.min(height) {
        buffer.draw(i, i, color::WHITE);
    }
}

fn checksum(pixels: &[color::PackedColor]) -> u32 {
    pixels.iter().fold(0u32, |acc, &pixel| acc.wrapping_add(pixel))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting lgw demo, pixel format {}", ACTIVE_FORMAT_NAME);

    // An explicit path argument wins over LGW_CONFIG.
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.to_string_lossy()))?,
        None => (*CONFIG).clone(),
    };
    debug!("Config: {:?}", config);

    let mut buffer = DynamicBuffer::new();
    buffer
        .try_init(
            config.buffer.width,
            config.buffer.height,
            config.buffer.fill_color(),
        )
        .context("Failed to initialize pixel buffer")?;
    info!(
        "Buffer initialized: {}x{} ({} pixels)",
        buffer.width(),
        buffer.height(),
        buffer.len()
    );

    draw_test_pattern(&mut buffer);

    println!("format:   {}", ACTIVE_FORMAT_NAME);
    println!("size:     {}x{}", buffer.width(), buffer.height());
    println!("checksum: {:#010x}", checksum(buffer.as_slice()));
    if let Some(row) = buffer.row(0) {
        let preview: Vec<String> = row.iter().take(8).map(|p| format!("{p:08x}")).collect();
        println!("row 0:    {}", preview.join(" "));
    }

    Ok(())
}
