use std::{borrow::Cow, collections::HashSet, io::Read};
use rgb::RGB8;
use serde::Deserialize;
use crate::error::{Error, Result};

/// A named reference color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedColor {
    name: Cow<'static, str>,
    rgb: RGB8,
}

impl NamedColor {
    pub fn new(name: impl Into<Cow<'static, str>>, rgb: RGB8) -> Self {
        Self { name: name.into(), rgb }
    }

    #[inline]
    pub fn name(&self) -> &str { &self.name }

    #[inline]
    pub fn rgb(&self) -> RGB8 { self.rgb }
}

/// An ordered list of named colors.
///
/// The order is significant: when a query is equally close to several
/// colors, the one listed first wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<NamedColor>, // Invariant: names are unique
}

/// One record of a JSON palette file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Record {
    name: String,
    rgb: [u8; 3],
}

impl Palette {
    /// Create a palette keeping the order of `colors`.  Fails if a
    /// name appears twice.  The palette may be empty.
    pub fn new(colors: impl IntoIterator<Item = NamedColor>) -> Result<Self> {
        let colors: Vec<NamedColor> = colors.into_iter().collect();
        let mut seen = HashSet::with_capacity(colors.len());
        for c in &colors {
            if !seen.insert(c.name()) {
                return Err(Error::DuplicateName(c.name().to_string()))
            }
        }
        Ok(Self { colors })
    }

    /// Build a palette from a table known to have unique names.
    pub(crate) fn from_static(table: &[(&'static str, [u8; 3])]) -> Self {
        let colors = table.iter()
            .map(|&(name, [r, g, b])| NamedColor::new(name, RGB8::new(r, g, b)))
            .collect();
        Self { colors }
    }

    /// Parse a palette from a JSON array of `{"name": …, "rgb": [r, g, b]}`
    /// records.  The order of the array is the order of the palette.
    ///
    /// # Example
    ///
    /// ```
    /// use web_color_names::Palette;
    /// let p = Palette::from_json(r#"[{"name": "Ink", "rgb": [10, 10, 30]}]"#)?;
    /// assert_eq!(p.len(), 1);
    /// # Ok::<(), web_color_names::Error>(())
    /// ```
    pub fn from_json(s: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(s)?;
        Self::from_records(records)
    }

    /// Same as [`Palette::from_json`] but reads the JSON from `rdr`.
    /// A failure of `rdr` itself is reported as [`Error::Io`].
    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(rdr)
            .map_err(|e| if e.is_io() { Error::Io(e.into()) } else { Error::Json(e) })?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<Record>) -> Result<Self> {
        let palette = Self::new(records.into_iter().map(|Record { name, rgb }| {
            NamedColor::new(name, RGB8::new(rgb[0], rgb[1], rgb[2]))
        }))?;
        tracing::debug!(colors = palette.len(), "loaded palette");
        Ok(palette)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Iterate over the colors in palette order.
    pub fn iter(&self) -> std::slice::Iter<'_, NamedColor> {
        self.colors.iter()
    }

    /// Returns the reference color named `name`, if any.
    pub fn get(&self, name: &str) -> Option<RGB8> {
        self.colors.iter().find(|c| c.name() == name).map(|c| c.rgb)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a NamedColor;
    type IntoIter = std::slice::Iter<'a, NamedColor>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
