//! Name the nearest web color of an RGB value.
//!
//! A [`ColorNameResolver`] scans a [`Palette`] of named reference
//! colors and returns the name of the one closest to a query color
//! (Euclidean [`distance`] in RGB space).  The built-in palette is
//! [`struct@WEB_COLORS`].
//!
//! ```
//! use web_color_names::{closest_name, closest_names};
//! assert_eq!(closest_name(&[1, 1, 1])?, "Black");
//! assert_eq!(closest_names(&["#ff0000", "250, 250, 250"])?, ["Red", "Snow"]);
//! # Ok::<(), web_color_names::Error>(())
//! ```
//!
//! Query colors are any type implementing [`QueryColor`]: the `rgb`
//! crate types, arrays and tuples of numbers, slices, and strings such
//! as `"12,200,7"` or `"#0cc807"`.

use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod error;
mod palettes;
pub use error::{Error, Result};
pub use palettes::ty::{NamedColor, Palette};
pub use palettes::WEB_COLORS;

/// Specifies how a value is read as a query color.
pub trait QueryColor {
    /// Return the red, green and blue components of the color.  They
    /// are usually in \[0, 255\] but any non-NaN value is accepted.
    fn to_rgb(&self) -> Result<RGB<f64>>;
}

/// Reject NaN components; every other value has a well defined distance.
fn checked(r: f64, g: f64, b: f64) -> Result<RGB<f64>> {
    if r.is_nan() || g.is_nan() || b.is_nan() {
        return Err(Error::InvalidQuery(format!("NaN component in ({r}, {g}, {b})")))
    }
    Ok(RGB { r, g, b })
}

impl<Q: QueryColor + ?Sized> QueryColor for &Q {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> { Q::to_rgb(self) }
}

impl QueryColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> { checked(self.r, self.g, self.b) }
}

impl QueryColor for RGB<f32> {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> {
        checked(self.r as f64, self.g as f64, self.b as f64)
    }
}

impl QueryColor for RGBA<f64> {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> { checked(self.r, self.g, self.b) }
}

impl QueryColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> {
        Ok(RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 })
    }
}

impl QueryColor for RGB16 {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> {
        Ok(RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 })
    }
}

impl QueryColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> {
        Ok(RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 })
    }
}

impl QueryColor for RGBA16 {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> {
        Ok(RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 })
    }
}

macro_rules! query_from_numbers { ($($t: ty),*) => {
    $(
        impl QueryColor for [$t; 3] {
            #[inline]
            fn to_rgb(&self) -> Result<RGB<f64>> {
                checked(self[0] as f64, self[1] as f64, self[2] as f64)
            }
        }

        impl QueryColor for ($t, $t, $t) {
            #[inline]
            fn to_rgb(&self) -> Result<RGB<f64>> {
                checked(self.0 as f64, self.1 as f64, self.2 as f64)
            }
        }
    )*
}}
query_from_numbers!(u8, u16, u32, i32, i64, f32, f64);

impl QueryColor for [f64] {
    fn to_rgb(&self) -> Result<RGB<f64>> {
        match *self {
            [r, g, b] => checked(r, g, b),
            _ => Err(Error::InvalidQuery(format!(
                "expected 3 components, got {}", self.len()))),
        }
    }
}

impl QueryColor for Vec<f64> {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> { self.as_slice().to_rgb() }
}

impl QueryColor for str {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> { parse_query(self) }
}

impl QueryColor for String {
    #[inline]
    fn to_rgb(&self) -> Result<RGB<f64>> { parse_query(self) }
}

/// Parse a query color written `"R,G,B"`, `"R G B"` (components may be
/// floats) or `"#RRGGBB"`.
pub fn parse_query(s: &str) -> Result<RGB<f64>> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidQuery(format!("“{s}” is not #RRGGBB")))
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16)
            .map(f64::from)
            .map_err(|e| Error::InvalidQuery(format!("“{s}”: {e}")));
        return Ok(RGB { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
    let number = |c: &str| c.parse::<f64>().map_err(|_| {
        Error::InvalidQuery(format!("“{c}” is not a number"))
    });
    // Every comma separates a field: an empty one is a missing component.
    let components = if s.contains(',') {
        s.split(',').map(|c| match c.trim() {
            "" => Err(Error::InvalidQuery(format!("missing component in “{s}”"))),
            c => number(c),
        }).collect::<Result<Vec<f64>>>()?
    } else {
        s.split_whitespace().map(number).collect::<Result<Vec<f64>>>()?
    };
    components.as_slice().to_rgb()
}

/// Euclidean distance between two colors in RGB space.
#[inline]
pub fn distance(a: RGB<f64>, b: RGB<f64>) -> f64 {
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    (dr * dr + dg * dg + db * db).sqrt()
}

#[inline]
fn to_f64(c: RGB8) -> RGB<f64> {
    RGB { r: f64::from(c.r), g: f64::from(c.g), b: f64::from(c.b) }
}


/// Finds the palette color nearest to a query.
#[derive(Clone, Copy, Debug)]
pub struct ColorNameResolver<'a> {
    palette: &'a Palette,
}

impl ColorNameResolver<'static> {
    /// A resolver over [`struct@WEB_COLORS`].
    pub fn web() -> Self { Self::new(&WEB_COLORS) }
}

impl Default for ColorNameResolver<'static> {
    fn default() -> Self { Self::web() }
}

impl<'a> ColorNameResolver<'a> {
    pub fn new(palette: &'a Palette) -> Self { Self { palette } }

    pub fn palette(&self) -> &'a Palette { self.palette }

    fn check_palette(&self) -> Result<()> {
        if self.palette.is_empty() { Err(Error::EmptyPalette) } else { Ok(()) }
    }

    /// Returns the palette color at the smallest distance of `query`.
    /// When several colors are at the same smallest distance, the
    /// first one in palette order is returned.
    ///
    /// An empty palette is reported before the query is examined.
    pub fn nearest<Q>(&self, query: &Q) -> Result<&'a NamedColor>
    where Q: QueryColor + ?Sized {
        self.check_palette()?;
        let q = query.to_rgb()?;
        let mut colors = self.palette.iter();
        let mut best = colors.next().ok_or(Error::EmptyPalette)?;
        let mut best_dist = distance(q, to_f64(best.rgb()));
        for c in colors {
            let d = distance(q, to_f64(c.rgb()));
            if d < best_dist {
                best = c;
                best_dist = d;
            }
        }
        Ok(best)
    }

    /// Returns the name of the palette color nearest to `query`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use web_color_names::ColorNameResolver;
    /// let names = ColorNameResolver::web();
    /// assert_eq!(names.resolve(&RGB8::new(250, 130, 110))?, "Salmon");
    /// # Ok::<(), web_color_names::Error>(())
    /// ```
    pub fn resolve<Q>(&self, query: &Q) -> Result<&'a str>
    where Q: QueryColor + ?Sized {
        self.nearest(query).map(NamedColor::name)
    }

    /// Apply [`ColorNameResolver::nearest`] to each query, in order.
    /// The first invalid query aborts the batch with
    /// [`Error::InBatch`] carrying its index.
    pub fn nearest_batch<Q>(&self, queries: &[Q]) -> Result<Vec<&'a NamedColor>>
    where Q: QueryColor {
        self.check_palette()?;
        tracing::debug!(queries = queries.len(), colors = self.palette.len(),
                        "resolving batch");
        queries.iter().enumerate()
            .map(|(i, q)| self.nearest(q).map_err(|e| e.at(i)))
            .collect()
    }

    /// Apply [`ColorNameResolver::resolve`] to each query, in order.
    /// Errors are reported as for [`ColorNameResolver::nearest_batch`].
    pub fn resolve_batch<Q>(&self, queries: &[Q]) -> Result<Vec<&'a str>>
    where Q: QueryColor {
        Ok(self.nearest_batch(queries)?.into_iter()
           .map(NamedColor::name)
           .collect())
    }

    /// Same as [`ColorNameResolver::resolve_batch`] but the queries are
    /// processed in parallel.  The output order is the input order.
    #[cfg(feature = "rayon")]
    pub fn par_resolve_batch<Q>(&self, queries: &[Q]) -> Result<Vec<&'a str>>
    where Q: QueryColor + Sync {
        use rayon::prelude::*;
        self.check_palette()?;
        tracing::debug!(queries = queries.len(), colors = self.palette.len(),
                        "resolving batch in parallel");
        let names: Vec<Result<&'a str>> = queries.par_iter()
            .map(|q| self.resolve(q))
            .collect();
        names.into_iter().enumerate()
            .map(|(i, r)| r.map_err(|e| e.at(i)))
            .collect()
    }
}

/// Returns the name of the web color nearest to `query`.
pub fn closest_name<Q: QueryColor + ?Sized>(query: &Q) -> Result<&'static str> {
    ColorNameResolver::web().resolve(query)
}

/// Returns the names of the web colors nearest to each of `queries`.
pub fn closest_names<Q: QueryColor>(queries: &[Q]) -> Result<Vec<&'static str>> {
    ColorNameResolver::web().resolve_batch(queries)
}
