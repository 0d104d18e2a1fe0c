//! Command script interpreter.
//!
//! Scripts are whitespace-separated tokens. Each command consumes a fixed
//! number of arguments, except `histogram` whose output path is optional and
//! only recognized by its `.json` extension. A failing command prints its
//! error and the script moves on to the next command.

use imgproc::histogram::Histogram;
use imgproc::{Component, FlipAxis, ImageStore};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::iter::Peekable;
use std::path::Path;

type CommandResult = Result<String, Box<dyn Error>>;

#[derive(Debug, Serialize)]
struct HistogramRecord {
    channel: &'static str,
    peak: u64,
    counts: Vec<u64>,
}

impl From<&Histogram> for HistogramRecord {
    fn from(value: &Histogram) -> Self {
        Self {
            channel: value.channel().as_str(),
            peak: value.peak(),
            counts: value.counts().to_vec(),
        }
    }
}

/// Runs every command in `input` against `store`, writing one status line per
/// command to `out`.
pub fn run<W: Write>(input: &str, store: &mut ImageStore, out: &mut W) -> io::Result<()> {
    let mut tokens = input.split_whitespace().peekable();
    while let Some(command) = tokens.next() {
        let command = command.to_ascii_lowercase();
        if command == "q" || command == "quit" {
            writeln!(out, "Quit image processor")?;
            return Ok(());
        }
        match execute(&command, &mut tokens, store) {
            Ok(message) => writeln!(out, "{message}")?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}

fn execute<'a, I>(command: &str, args: &mut Peekable<I>, store: &mut ImageStore) -> CommandResult
where
    I: Iterator<Item = &'a str>,
{
    let mut next = || args.next().ok_or("No more inputs");
    match command {
        "load" => {
            let (path, name) = (next()?, next()?);
            store.load(name, read_image(Path::new(path))?);
            Ok("Load Operation Successful!".into())
        }
        "save" => {
            let (path, name) = (next()?, next()?);
            write_image(store, name, Path::new(path))?;
            Ok("Save Operation Successful!".into())
        }
        "brighten" => {
            let delta = next()?;
            let (name, new_name) = (next()?, next()?);
            let delta: i32 = delta
                .parse()
                .map_err(|_| format!("Invalid brighten increment: {delta}"))?;
            store.brighten(delta, name, new_name)?;
            Ok("Brighten Operation Successful!".into())
        }
        "vertical-flip" | "horizontal-flip" => {
            let (name, new_name) = (next()?, next()?);
            let axis = if command == "vertical-flip" {
                FlipAxis::Vertical
            } else {
                FlipAxis::Horizontal
            };
            store.flip(axis, name, new_name)?;
            Ok(format!("Flip ({axis}) Operation Successful!"))
        }
        "grey-scale" => {
            let component = next()?;
            let (name, new_name) = (next()?, next()?);
            store.greyscale(component.parse::<Component>()?, name, new_name)?;
            Ok("Greyscale Operation Successful!".into())
        }
        "sepia" => {
            let (name, new_name) = (next()?, next()?);
            store.sepia(name, new_name)?;
            Ok("Sepia Operation Successful!".into())
        }
        "blur" => {
            let (name, new_name) = (next()?, next()?);
            store.blur(name, new_name)?;
            Ok("Blur Operation Successful!".into())
        }
        "sharpen" => {
            let (name, new_name) = (next()?, next()?);
            store.sharpen(name, new_name)?;
            Ok("Sharpen Operation Successful!".into())
        }
        "histogram" => {
            let name = next()?;
            // The output path is optional; only a `.json` token is taken as one.
            let target = args.next_if(|token| extension(Path::new(token)) == "json");
            let records: Vec<HistogramRecord> =
                store.histograms(name)?.iter().map(HistogramRecord::from).collect();
            let json = serde_json::to_string_pretty(&records)?;
            match target {
                Some(path) => {
                    fs::write(path, json)?;
                    Ok("Histogram Operation Successful!".into())
                }
                None => Ok(json),
            }
        }
        other => Err(format!("Invalid command: {other}").into()),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn read_image(path: &Path) -> Result<imgproc::PixelGrid, Box<dyn Error>> {
    if extension(path) == "ppm" {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("{} not found: {err}", path.display()))?;
        Ok(imgproc::codec::decode(&text)?)
    } else {
        Ok(imgproc::io::load_raster(path)?)
    }
}

fn write_image(store: &ImageStore, name: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    match extension(path).as_str() {
        "ppm" => fs::write(path, store.encode_ppm(name)?)?,
        "png" | "jpg" | "jpeg" | "bmp" => imgproc::io::save_raster(store.get(name)?, path)?,
        _ => return Err("Invalid filepath".into()),
    }
    Ok(())
}
