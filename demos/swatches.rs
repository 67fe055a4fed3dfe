use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use web_color_names::{ColorNameResolver, WEB_COLORS};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// One row of swatches: the queried colors above, the colors they
/// resolve to below, and the resolved names as tooltips.
fn table_of_matches(fh: &mut impl Write, names: &ColorNameResolver,
                    queries: &[RGB8], width: u32,
                    comment: &str) -> Result<(), Err> {
    let matches = names.nearest_batch(queries)?;
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &q in queries {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(q))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in matches {
        writeln!(fh, "  <td title=\"{}\" style=\"width: {width}px; \
                      height: 30px; background-color: {}\"></td>",
                 c.name(), css_string(c.rgb()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn sweep(c0: [u8; 3], c1: [u8; 3], n: usize) -> Vec<RGB8> {
    let dt = 1. / (n - 1) as f64;
    let lerp = |a: u8, b: u8, t: f64| {
        (a as f64 + t * (b as f64 - a as f64)).round() as u8 };
    (0 .. n).map(|i| {
        let t = i as f64 * dt;
        RGB8::new(lerp(c0[0], c1[0], t), lerp(c0[1], c1[1], t),
                  lerp(c0[2], c1[2], t))
    }).collect()
}

fn main() -> Result<(), Err> {
    let names = ColorNameResolver::web();
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Web color names: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Palette</h3>")?;
    let colors: Vec<RGB8> = WEB_COLORS.iter().map(|c| c.rgb()).collect();
    for row in colors.chunks(20) {
        table_of_matches(&mut fh, &names, row, 40, "")?;
    }

    writeln!(fh, "<h3>Sweeps</h3>")?;
    for (c0, c1, comment) in [([0, 0, 0], [255, 255, 255], "black to white"),
                              ([255, 0, 0], [0, 0, 255], "red to blue"),
                              ([255, 0, 0], [0, 255, 0], "red to green"),
                              ([94, 0, 99], [255, 235, 170], "")] {
        table_of_matches(&mut fh, &names, &sweep(c0, c1, 40), 20, comment)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
