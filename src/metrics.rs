//! Raw metrics tables and derived vertical metrics.

/// Fields read from the `OS/2` table.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Os2Metrics {
    /// Windows ascender as stored in the table. Some fonts write a negative
    /// value here, so it is reinterpreted as signed before use.
    pub win_ascent: u16,
    /// Windows descender as stored in the table.
    pub win_descent: u16,
    /// Typographic ascender.
    pub typo_ascent: i16,
    /// Typographic descender, usually negative.
    pub typo_descent: i16,
    /// Thickness of the strikeout stroke.
    pub strikeout_size: i16,
    /// Position of the top of the strikeout stroke relative to the baseline.
    pub strikeout_position: i16,
    /// Visual weight class, 1 to 1000.
    pub weight_class: u16,
    /// Font selection flags (`fsSelection`).
    pub selection: u16,
}

/// Fields read from the `head` table.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct HeadMetrics {
    /// Maximum y coordinate of all glyph bounding boxes.
    pub y_max: i16,
    /// Minimum y coordinate of all glyph bounding boxes.
    pub y_min: i16,
}

/// Fields read from the `post` table.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct PostMetrics {
    pub underline_thickness: i16,
    pub underline_position: i16,
}

/// Metrics tables of a font. Each table is optional since fonts in the wild
/// omit them.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct MetricsBundle {
    pub os2: Option<Os2Metrics>,
    pub head: Option<HeadMetrics>,
    pub post: Option<PostMetrics>,
}

impl MetricsBundle {
    /// Returns the ascent in font units.
    ///
    /// The first non-zero of the signed Windows ascender, the typographic
    /// ascender and the bounding box maximum wins. If every available
    /// candidate is zero the result is zero, and if no source table is
    /// present the result is `None`.
    pub fn ascent(&self) -> Option<i32> {
        first_non_zero([
            self.os2.map(|os2| fix_unsigned_to_signed_short(os2.win_ascent) as i32),
            self.os2.map(|os2| os2.typo_ascent as i32),
            self.head.map(|head| head.y_max as i32),
        ])
    }

    /// Returns the descent in font units.
    ///
    /// The signed Windows descender is used as is. The typographic and bounding
    /// box fallbacks are negated since they are stored as negative extents.
    pub fn descent(&self) -> Option<i32> {
        first_non_zero([
            self.os2.map(|os2| fix_unsigned_to_signed_short(os2.win_descent) as i32),
            self.os2.map(|os2| -(os2.typo_descent as i32)),
            self.head.map(|head| -(head.y_min as i32)),
        ])
    }
}

/// Reinterprets a 16-bit value stored as unsigned as a two's complement
/// signed value.
pub fn fix_unsigned_to_signed_short(value: u16) -> i16 {
    value as i16
}

fn first_non_zero<const N: usize>(candidates: [Option<i32>; N]) -> Option<i32> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| *value != 0)
        .or_else(|| candidates.iter().any(Option::is_some).then_some(0))
}
