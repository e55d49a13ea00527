use crate::geometry::BBox;
use crate::text::Char;

/// Options for grouping characters into words.
#[derive(Debug, Clone, PartialEq)]
pub struct WordOptions {
    /// Maximum horizontal gap between characters of the same word.
    pub x_tolerance: f64,
    /// Maximum vertical offset between characters of the same word.
    pub y_tolerance: f64,
    /// If true, include blank/space characters in words instead of splitting on them.
    pub keep_blank_chars: bool,
    /// If true, keep the input order of characters instead of reading order.
    pub use_text_flow: bool,
    /// If true, expand common Latin ligatures (U+FB00–U+FB06) to their multi-character equivalents.
    pub expand_ligatures: bool,
}

impl Default for WordOptions {
    fn default() -> Self {
        Self {
            x_tolerance: 3.0,
            y_tolerance: 3.0,
            keep_blank_chars: false,
            use_text_flow: false,
            expand_ligatures: true,
        }
    }
}

/// A positioned text token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The text content of this word.
    pub text: String,
    /// Bounding box encompassing all constituent characters.
    pub bbox: BBox,
}

impl Word {
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// Groups characters into words based on spatial proximity.
pub struct WordExtractor;

impl WordExtractor {
    /// Extract words from the given characters.
    ///
    /// Characters are first put in reading order: clustered into text lines
    /// (a char joins the current line when its `top` is within `y_tolerance`
    /// of the line's first char), lines top-to-bottom, chars left-to-right.
    /// A word ends at a blank char (unless `keep_blank_chars`), or when the
    /// next char is more than `x_tolerance` away horizontally or more than
    /// `y_tolerance` away vertically.
    pub fn extract(chars: &[Char], options: &WordOptions) -> Vec<Word> {
        if chars.is_empty() {
            return Vec::new();
        }

        let ordered: Vec<&Char> = if options.use_text_flow {
            chars.iter().collect()
        } else {
            reading_order(chars, options.y_tolerance)
        };

        let mut words = Vec::new();
        let mut current: Vec<&Char> = Vec::new();

        for ch in ordered {
            if ch.is_blank() && !options.keep_blank_chars {
                if !current.is_empty() {
                    words.push(Self::make_word(&current, options.expand_ligatures));
                    current.clear();
                }
                continue;
            }

            if let Some(last) = current.last() {
                if Self::should_split(last, ch, options) {
                    words.push(Self::make_word(&current, options.expand_ligatures));
                    current.clear();
                }
            }
            current.push(ch);
        }

        if !current.is_empty() {
            words.push(Self::make_word(&current, options.expand_ligatures));
        }

        words
    }

    /// Overlapping or touching chars have a gap of 0 and always group.
    fn should_split(last: &Char, current: &Char, options: &WordOptions) -> bool {
        let x_gap =
            (last.bbox.x0.max(current.bbox.x0) - last.bbox.x1.min(current.bbox.x1)).max(0.0);
        let y_diff = (current.bbox.top - last.bbox.top).abs();
        x_gap > options.x_tolerance || y_diff > options.y_tolerance
    }

    fn make_word(chars: &[&Char], expand_ligatures: bool) -> Word {
        let raw: String = chars.iter().map(|c| c.text.as_str()).collect();
        let text = if expand_ligatures {
            expand_ligatures_in_text(&raw)
        } else {
            raw
        };
        let bbox = chars[1..]
            .iter()
            .fold(chars[0].bbox, |acc, c| acc.union(&c.bbox));
        Word { text, bbox }
    }
}

fn reading_order(chars: &[Char], y_tolerance: f64) -> Vec<&Char> {
    let mut by_top: Vec<&Char> = chars.iter().collect();
    by_top.sort_by(|a, b| a.bbox.top.total_cmp(&b.bbox.top));

    let mut lines: Vec<Vec<&Char>> = Vec::new();
    for ch in by_top {
        match lines.last_mut() {
            Some(line) if (ch.bbox.top - line[0].bbox.top).abs() <= y_tolerance => line.push(ch),
            _ => lines.push(vec![ch]),
        }
    }

    lines
        .into_iter()
        .flat_map(|mut line| {
            line.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));
            line
        })
        .collect()
}

/// Expand common Latin ligatures (U+FB00–U+FB06) to their multi-character equivalents.
fn expand_ligatures_in_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{FB00}' => result.push_str("ff"),
            '\u{FB01}' => result.push_str("fi"),
            '\u{FB02}' => result.push_str("fl"),
            '\u{FB03}' => result.push_str("ffi"),
            '\u{FB04}' => result.push_str("ffl"),
            '\u{FB05}' => result.push_str("\u{017F}t"), // long s + t
            '\u{FB06}' => result.push_str("st"),
            _ => result.push(ch),
        }
    }
    result
}
