//! color-name - Name the nearest web color of RGB values
//!
//! Colors are given as arguments or, when there is none, read one per
//! line from the standard input.  Each is printed back followed by the
//! name of the closest palette color.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::Level;
use web_color_names::{ColorNameResolver, Palette, WEB_COLORS};

/// Name the nearest web color of RGB values.
#[derive(Parser, Debug)]
#[command(name = "color-name")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Colors written "R,G,B" or "#RRGGBB"; read from stdin if omitted
    colors: Vec<String>,

    /// JSON palette, an array of {"name": …, "rgb": [r, g, b]}, to use
    /// instead of the web colors
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Also print the matched color as #rrggbb
    #[arg(long, action = ArgAction::SetTrue)]
    show_rgb: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn read_queries(input: impl BufRead) -> Result<Vec<String>> {
    let mut queries = vec![];
    for line in input.lines() {
        let line = line.context("cannot read standard input")?;
        let line = line.trim();
        if !line.is_empty() {
            queries.push(line.to_string());
        }
    }
    Ok(queries)
}

fn run(args: Args) -> Result<()> {
    let custom;
    let palette: &Palette = match &args.palette {
        Some(path) => {
            let fh = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            custom = Palette::from_reader(io::BufReader::new(fh))
                .with_context(|| format!("cannot load palette {}", path.display()))?;
            &custom
        }
        None => &WEB_COLORS,
    };
    let queries = if args.colors.is_empty() {
        read_queries(io::stdin().lock())?
    } else {
        args.colors
    };
    tracing::debug!(queries = queries.len(), colors = palette.len(), "starting");

    let matches = ColorNameResolver::new(palette).nearest_batch(&queries)?;
    let mut out = BufWriter::new(io::stdout().lock());
    for (q, c) in queries.iter().zip(matches) {
        if args.show_rgb {
            let rgb = c.rgb();
            writeln!(out, "{q}\t{}\t#{:02x}{:02x}{:02x}", c.name(), rgb.r, rgb.g, rgb.b)?;
        } else {
            writeln!(out, "{q}\t{}", c.name())?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();
    run(args)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_skip_blank_lines() {
        let input = b"0,0,0\n\n  #ff0000  \n\t\n255 255 255\n";
        let qs = read_queries(&input[..]).unwrap();
        assert_eq!(qs, ["0,0,0", "#ff0000", "255 255 255"]);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from(
            ["color-name", "-d", "--show-rgb", "-p", "p.json", "1,2,3"]).unwrap();
        assert!(args.debug && args.show_rgb);
        assert_eq!(args.palette, Some(PathBuf::from("p.json")));
        assert_eq!(args.colors, ["1,2,3"]);
    }
}
