//! Sliding window test program
//!
//! This application is for testing purposes only and is not intended for practical use
//!
//! ```text
//! windowtest SIZE [FILE]   print every window over the lines of FILE (or stdin)
//! windowtest bench         time windows over random data
//! ```

use corekit::{SkipLastExt, SlidingWindow, SlidingWindowExt, Source, Truncate};
use log::error;
use std::{
    env,
    fs::File,
    cell::Cell,
    io::{self, BufRead, BufReader, Write},
    path::Path,
    process,
};

const MAX_LINE_WIDTH: isize = 24;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(size) = args.next() else {
        usage();
    };
    if size == "bench" {
        bench();
        return;
    }
    let Ok(size) = size.parse::<isize>() else {
        usage();
    };

    let reader: Box<dyn BufRead> = match args.next().as_deref() {
        None | Some("-") => Box::new(BufReader::new(io::stdin())),
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                error!("cannot open {}: {}", path, err);
                process::exit(1);
            }
        },
    };

    let time0 = std::time::Instant::now();
    let count = match print_windows(reader, size, &mut io::stdout().lock()) {
        Ok(count) => count,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    eprintln!(
        "{} windows of {} in {:.03}s",
        count,
        size,
        time0.elapsed().as_secs_f64()
    );
}

/// Writes every window over the lines of `reader`, returning how many were written.
///
/// A read error ends the walk and is returned after the windows seen so far.
fn print_windows(reader: impl BufRead, size: isize, out: &mut impl Write) -> io::Result<usize> {
    let read_error = Cell::new(None);
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(err) => {
            read_error.set(Some(err));
            None
        }
    });

    let mut window = lines.sliding_window(size).map_err(io::Error::other)?;
    if let Some(err) = read_error.take() {
        return Err(err);
    }
    let mut count = 0;
    loop {
        print_window(&window, out)?;
        count += 1;
        if !window.slide_next().map_err(io::Error::other)? {
            break;
        }
    }
    window.release();

    match read_error.take() {
        Some(err) => Err(err),
        None => Ok(count),
    }
}

fn print_window<S: Source<Item = String>>(
    window: &SlidingWindow<S>,
    out: &mut impl Write,
) -> io::Result<()> {
    let cells = window
        .iter()
        .map(|line| line.truncate_to(MAX_LINE_WIDTH).unwrap_or_default())
        .collect::<Vec<_>>();
    writeln!(out, "[{}]", cells.join(" | "))
}

fn bench() {
    let time0 = std::time::Instant::now();
    let mut sink = 0u32;
    while time0.elapsed().as_secs_f64() < 1.0 {
        sink = sink.wrapping_add(warm_up());
    }
    log::debug!("warm-up checksum {:x}", sink);

    let src_size = 0x100000;
    let input = random_u32(src_size);

    for window_size in [4, 64, 1024] {
        let times = 10;

        let time0 = std::time::Instant::now();
        let mut acc = 0u64;
        for _ in 0..times {
            let Ok(mut window) = input.iter().copied().sliding_window(window_size) else {
                unreachable!();
            };
            while let Ok(true) = window.slide_next() {
                if let Ok(&value) = window.get(window_size / 2) {
                    acc = acc.wrapping_add(value as u64);
                }
            }
        }
        let elapsed = time0.elapsed();

        println!(
            "times {}: size {:5}: {:.03}s {:.02}M slides/s (checksum {:x})",
            times,
            window_size,
            elapsed.as_secs_f64(),
            (times * src_size) as f64 / elapsed.as_secs_f64() / 1_000_000.0,
            acc,
        );
    }
}

fn usage() -> ! {
    let arg = env::args_os().next().unwrap_or_default();
    let path = Path::new(&arg);
    let lpc = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("windowtest");
    eprintln!("{} SIZE [FILE]", lpc);
    eprintln!("{} bench", lpc);
    process::exit(1);
}

fn random_u32(limit: usize) -> Vec<u32> {
    use rand::RngCore;
    let mut rng = rand::rng();
    (0..limit).map(|_| rng.next_u32()).collect()
}

/// Spins the CPU up to speed before timing.
fn warm_up() -> u32 {
    random_u32(0x4000)
        .into_iter()
        .skip_last_n(1)
        .map_or(0, |rest| rest.fold(0, u32::wrapping_add))
}
