//! A thin illustrative host loop: loads a ROM image, runs the CPU in
//! 100-instruction batches, optionally feeds a scripted string of keyboard
//! input one character per batch, and prints the text screen to stdout
//! whenever the bus reports it dirty. A real terminal renderer and input
//! driver are external collaborators this binary does not attempt to be --
//! see the library's crate-level documentation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use apple2_6502::video::GlyphAttribute;
use apple2_6502::{bus::Bus, cpu_6502::Cpu6502, keyboard, rom, video};

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs a flat Apple II ROM image against the 6502 interpreter.")]
struct Args {
    /// Path to a flat system ROM image (no header, up to 12 KB).
    rom: PathBuf,

    /// Fetch/decode/execute steps per batch, matching the host's polling
    /// granularity.
    #[arg(long, default_value_t = 100)]
    batch_size: u32,

    /// Total number of batches to run before exiting.
    #[arg(long, default_value_t = 500)]
    batches: u32,

    /// Scripted keyboard input: one character fed to the latch per batch.
    #[arg(long)]
    input: Option<String>,

    /// Increase logging verbosity; repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Renders the glyph's visual attribute the way a terminal stand-in for the
/// real text-mode hardware would: inverse as reversed video, flashing as a
/// blinking cell, normal as plain text.
fn render_glyph(ch: char, attribute: GlyphAttribute) -> String {
    let cell = ch.to_string();
    match attribute {
        GlyphAttribute::Inverse => cell.reversed().to_string(),
        GlyphAttribute::Flashing => cell.blink().to_string(),
        GlyphAttribute::Normal => cell.normal().to_string(),
    }
}

fn print_screen(bus: &mut Bus) {
    for row in video::TEXT_ROW_OFFSETS {
        let mut line = String::with_capacity(video::TEXT_COLUMNS);
        for col in 0..video::TEXT_COLUMNS as u16 {
            let byte = bus.read(row + col);
            let (ch, attribute) = video::decode_glyph(byte);
            line.push_str(&render_glyph(ch, attribute));
        }
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rom_bytes = rom::load_rom_image(&args.rom)
        .with_context(|| format!("failed to load ROM image at {}", args.rom.display()))?;

    let mut bus = Bus::new();
    bus.load_rom(&rom_bytes);
    let mut cpu = Cpu6502::new(bus);

    let mut input_bytes = args.input.unwrap_or_default().into_bytes().into_iter();

    for batch in 0..args.batches {
        if let Some(byte) = input_bytes.next() {
            cpu.bus
                .set_keyboard_latch(keyboard::translate_key_byte_for_latch(byte));
        }
        cpu.run_batch(args.batch_size);
        if cpu.bus.take_video_dirty() {
            log::trace!("batch {batch}: video dirty, redrawing");
            print_screen(&mut cpu.bus);
        }
    }

    print_screen(&mut cpu.bus);
    Ok(())
}
