//! Page type holding the primitives tables are inferred from.

use crate::shapes::Line;
use crate::text::Char;
use crate::words::{Word, WordExtractor, WordOptions};

/// A single page of positioned primitives.
///
/// A page carries ruling lines plus its text, either as individual
/// characters (grouped into words on demand) or as words that were already
/// tokenized upstream. Pages are read-only inputs to table detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page number (1-based).
    page_number: usize,
    /// Page width in points, if known.
    width: Option<f64>,
    /// Page height in points, if known.
    height: Option<f64>,
    /// Ruling lines drawn on the page.
    lines: Vec<Line>,
    /// Characters on the page.
    chars: Vec<Char>,
    /// Words tokenized upstream.
    words: Vec<Word>,
}

impl Page {
    /// Create a page from lines and already-tokenized words.
    pub fn new(page_number: usize, lines: Vec<Line>, words: Vec<Word>) -> Self {
        Self {
            page_number,
            width: None,
            height: None,
            lines,
            chars: Vec::new(),
            words,
        }
    }

    /// Create a page from lines and individual characters.
    pub fn from_chars(page_number: usize, lines: Vec<Line>, chars: Vec<Char>) -> Self {
        Self {
            page_number,
            width: None,
            height: None,
            lines,
            chars,
            words: Vec::new(),
        }
    }

    /// Attach page dimensions.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Returns the page number (1-based).
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn chars(&self) -> &[Char] {
        &self.chars
    }

    /// Returns the words tokenized upstream (empty for char-based pages).
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns `true` if the page has no lines and no text.
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty() && self.chars.is_empty() && self.words.is_empty()
    }

    /// Extract words from this page.
    ///
    /// Char-based pages group their characters with `x_tolerance` and
    /// `y_tolerance` from the options. Pages built from words return those
    /// words unchanged, in input order; they were tokenized upstream.
    pub fn extract_words(&self, options: &WordOptions) -> Vec<Word> {
        if self.chars.is_empty() {
            self.words.clone()
        } else {
            WordExtractor::extract(&self.chars, options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    /// Glyphs of `text` on one baseline, 5 points wide each.
    fn glyphs(text: &str, x0: f64, top: f64) -> Vec<Char> {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let left = x0 + 5.0 * i as f64;
                Char::new(c.to_string(), BBox::new(left, top, left + 5.0, top + 9.0))
            })
            .collect()
    }

    #[test]
    fn test_blank_page_with_size() {
        let page = Page::new(7, Vec::new(), Vec::new()).with_size(595.0, 842.0);
        assert_eq!(page.page_number(), 7);
        assert_eq!((page.width(), page.height()), (Some(595.0), Some(842.0)));
        assert!(page.is_blank());
        assert!(page.extract_words(&WordOptions::default()).is_empty());
    }

    #[test]
    fn test_size_unknown_by_default() {
        let page = Page::from_chars(1, Vec::new(), glyphs("x", 0.0, 0.0));
        assert_eq!(page.width(), None);
        assert_eq!(page.height(), None);
    }

    #[test]
    fn test_char_page_groups_words() {
        let mut chars = glyphs("Date", 20.0, 50.0);
        chars.extend(glyphs("Amount", 90.0, 50.0));
        chars.extend(glyphs("2024", 20.0, 70.0));
        let page = Page::from_chars(1, Vec::new(), chars);

        let texts: Vec<String> = page
            .extract_words(&WordOptions::default())
            .into_iter()
            .map(|w| w.text)
            .collect();
        assert_eq!(texts, ["Date", "Amount", "2024"]);
        assert!(page.words().is_empty());
        assert!(!page.is_blank());
    }

    #[test]
    fn test_char_page_honours_x_tolerance() {
        // "Net" ends at 15, "Pay" starts at 21: a 6 point gap.
        let mut chars = glyphs("Net", 0.0, 0.0);
        chars.extend(glyphs("Pay", 21.0, 0.0));
        let page = Page::from_chars(2, Vec::new(), chars);
        assert_eq!(page.extract_words(&WordOptions::default()).len(), 2);

        let loose = WordOptions {
            x_tolerance: 6.0,
            ..WordOptions::default()
        };
        let words = page.extract_words(&loose);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "NetPay");
    }

    #[test]
    fn test_word_page_returns_words_unchanged() {
        let words = vec![
            Word::new("right", BBox::new(60.0, 10.0, 90.0, 20.0)),
            Word::new("left", BBox::new(0.0, 10.0, 30.0, 20.0)),
        ];
        let page = Page::new(3, Vec::new(), words.clone());
        assert_eq!(page.extract_words(&WordOptions::default()), words);
        assert_eq!(page.words(), words.as_slice());
    }

    #[test]
    fn test_rules_alone_make_page_non_blank() {
        let page = Page::new(
            2,
            vec![Line::vertical(40.0, 0.0, 100.0), Line::horizontal(0.0, 50.0, 80.0)],
            Vec::new(),
        );
        assert_eq!(page.lines().len(), 2);
        assert!(!page.is_blank());
    }
}
