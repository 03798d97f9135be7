// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate dembrot;
extern crate env_logger;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches};
use dembrot::output::{downsample, save};
use dembrot::{Renderer, ViewWindow};
use failure::Error;
use num::Complex;
use std::str::FromStr;

fn validate_number<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_float(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const REAL: &str = "real";
const IMAG: &str = "imag";
const SPAN: &str = "span";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const ESCAPE: &str = "escape-radius";
const THREADS: &str = "threads";
const NO_ANTIALIAS: &str = "no-antialias";

fn args<'a>() -> ArgMatches<'a> {
    App::new("dembrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Distance-estimated Mandelbrot renderer")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name(REAL)
                .index(1)
                .requires_all(&[IMAG, SPAN])
                .validator(|s| validate_float(&s, "Could not parse the real part of the center"))
                .help("Real part of the center of the view"),
        )
        .arg(
            Arg::with_name(IMAG)
                .index(2)
                .requires_all(&[REAL, SPAN])
                .validator(|s| {
                    validate_float(&s, "Could not parse the imaginary part of the center")
                })
                .help("Imaginary part of the center of the view"),
        )
        .arg(
            Arg::with_name(SPAN)
                .index(3)
                .requires_all(&[REAL, IMAG])
                .validator(|s| {
                    validate_float(&s, "Could not parse the span")?;
                    validate_number(
                        &s,
                        ::std::f64::MIN_POSITIVE,
                        "Could not parse the span",
                        "Span must be greater than zero",
                    )
                })
                .help("Width and height of the view on the complex plane"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("out.png")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1600")
                .validator(|s| {
                    validate_number(
                        &s,
                        1u32,
                        "Could not parse image size",
                        "Image size must be at least one pixel",
                    )
                })
                .help("Side of the rendered image, before anti-aliasing halves it"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("10000")
                .validator(|s| {
                    validate_number(
                        &s,
                        1usize,
                        "Could not parse iteration count",
                        "Iteration count must be at least one",
                    )
                })
                .help("Most iterations to spend on any one point"),
        )
        .arg(
            Arg::with_name(ESCAPE)
                .long(ESCAPE)
                .short("e")
                .takes_value(true)
                .default_value("10")
                .validator(|s| {
                    validate_float(&s, "Could not parse escape radius")?;
                    match f64::from_str(&s) {
                        Ok(r) if r > 1.0 => Ok(()),
                        _ => Err("Escape radius must be greater than one".to_string()),
                    }
                })
                .help("Radius past which an orbit counts as escaped"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_number(
                        &s,
                        1usize,
                        "Could not parse thread count",
                        "Thread count must be at least one",
                    )
                })
                .help("Number of threads to render with [default: one per CPU]"),
        )
        .arg(
            Arg::with_name(NO_ANTIALIAS)
                .long(NO_ANTIALIAS)
                .help("Write the image at full size instead of halving it"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, Error>
where
    T::Err: ::std::fmt::Display,
{
    match matches.value_of(name) {
        None => Ok(None),
        Some(s) => T::from_str(s)
            .map(Some)
            .map_err(|e| format_err!("Could not parse {} '{}': {}", name, s, e)),
    }
}

fn window(matches: &ArgMatches) -> Result<ViewWindow, Error> {
    let real = value::<f64>(matches, REAL)?;
    let imag = value::<f64>(matches, IMAG)?;
    let span = value::<f64>(matches, SPAN)?;
    match (real, imag, span) {
        (Some(re), Some(im), Some(span)) => Ok(ViewWindow::new(Complex::new(re, im), span)?),
        _ => Ok(ViewWindow::whole_set()),
    }
}

fn run() -> Result<(), Error> {
    let matches = args();

    let window = window(&matches)?;
    let size = value::<u32>(&matches, SIZE)?.unwrap_or(1600);
    let iterations = value::<usize>(&matches, ITERATIONS)?.unwrap_or(10_000);
    let escape_radius = value::<f64>(&matches, ESCAPE)?.unwrap_or(10.0);
    let threads = value::<usize>(&matches, THREADS)?.unwrap_or_else(num_cpus::get);
    let output = matches.value_of(OUTPUT).unwrap_or("out.png");

    let renderer = Renderer::new(window, size, iterations)?.with_escape_radius(escape_radius)?;
    let image = renderer.render(threads)?.into_image();

    let image = if matches.is_present(NO_ANTIALIAS) {
        image
    } else {
        debug!("Downsampling {}x{} by 2", size, size);
        downsample(&image, 2)
    };
    save(&image, output)
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
