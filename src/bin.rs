use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

use chip8_host::{cli::Options, load_path, HostContext, Pacer};
use clap::Parser;
use crisp8::{Crisp8, Keyboard};

const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let opts = Options::parse();

    let mut chip = Crisp8::new(HostContext::new());
    chip.set_quirks(opts.quirks());
    load_path(&mut chip, &opts.rom)?;

    let mut pacer = Pacer::new(opts.speed)?;
    let mut keyboard = Keyboard::new();
    let run_for = Duration::from_secs_f64(opts.seconds);
    log::info!("running {} for {:?} at speed {}", opts.rom, run_for, opts.speed);

    let started = Instant::now();
    let mut last = started;
    let mut executed = 0u64;
    while started.elapsed() < run_for {
        let now = Instant::now();
        for _ in 0..pacer.advance(now - last) {
            let raw = keyboard.raw_snapshot();
            keyboard.begin_frame(&raw);
            match chip.tick(&keyboard) {
                Ok(()) => executed += 1,
                Err(nb::Error::WouldBlock) => {}
                Err(nb::Error::Other(e)) => match e {},
            }
        }
        last = now;
        thread::sleep(FRAME_PERIOD);
    }
    log::debug!("executed {} instructions", executed);

    print!("{}", chip.frame());
    println!("sound: {}", if chip.should_play_sound() { "on" } else { "off" });
    Ok(())
}
