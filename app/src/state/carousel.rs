use std::time::Duration;

use crate::catalog::{Error, Result};

/// Delay between automatic slide changes.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// How long after a manual navigation autoplay stays suspended.
pub const RESUME_DELAY: Duration = Duration::from_millis(10_000);

/// Rotation state for the testimonial slider. The slide index always
/// stays within `[0, len)`; wrap-around goes through modulo arithmetic,
/// never through an out-of-range intermediate value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
    autoplaying: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self {
            current: 0,
            len,
            autoplaying: true,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplaying
    }

    /// Arrows and indicator dots only make sense with something to
    /// navigate between.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jumps to a slide. An out-of-range index is rejected and leaves the
    /// current slide untouched.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    pub fn pause(&mut self) {
        self.autoplaying = false;
    }

    pub fn resume(&mut self) {
        self.autoplaying = true;
    }
}

/// Discrete display size for a quote, so long testimonials drop to a
/// smaller face instead of overflowing the slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteSize {
    Xl,
    Lg,
    Md,
    Base,
}

impl QuoteSize {
    pub fn for_quote(quote: &str) -> Self {
        match quote.chars().count() {
            0..=99 => QuoteSize::Xl,
            100..=199 => QuoteSize::Lg,
            200..=299 => QuoteSize::Md,
            _ => QuoteSize::Base,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            QuoteSize::Xl => "quote-xl",
            QuoteSize::Lg => "quote-lg",
            QuoteSize::Md => "quote-md",
            QuoteSize::Base => "quote-base",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_an_empty_collection() {
        assert_eq!(Err(Error::EmptyCatalog), Carousel::new(0));
    }

    #[test]
    fn index_stays_in_range_for_any_navigation_sequence() {
        for len in 1..=7 {
            let mut carousel = Carousel::new(len).unwrap();
            for step in 0..50 {
                if step % 3 == 0 {
                    carousel.retreat();
                } else {
                    carousel.advance();
                }
                assert!(carousel.current() < len, "len={len} step={step}");
            }
        }
    }

    #[test]
    fn advance_wraps_at_the_end() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(2);
        carousel.advance();
        assert_eq!(0, carousel.current());
    }

    #[test]
    fn retreat_wraps_at_the_start() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.retreat();
        assert_eq!(2, carousel.current());
    }

    #[test]
    fn single_slide_wraps_onto_itself_and_hides_controls() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.advance();
        carousel.retreat();
        assert_eq!(0, carousel.current());
        assert!(!carousel.has_controls());
        assert!(Carousel::new(2).unwrap().has_controls());
    }

    #[test]
    fn go_to_rejects_out_of_range_indices() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.go_to(3);
        assert!(!carousel.go_to(5));
        assert!(!carousel.go_to(usize::MAX));
        assert_eq!(3, carousel.current());
        assert!(carousel.go_to(4));
        assert_eq!(4, carousel.current());
    }

    #[test]
    fn pause_and_resume_toggle_autoplay() {
        let mut carousel = Carousel::new(2).unwrap();
        assert!(carousel.is_autoplaying());
        carousel.pause();
        assert!(!carousel.is_autoplaying());
        carousel.pause();
        assert!(!carousel.is_autoplaying());
        carousel.resume();
        assert!(carousel.is_autoplaying());
    }

    #[test]
    fn quote_sizes_step_down_at_the_documented_thresholds() {
        assert_eq!(QuoteSize::Xl, QuoteSize::for_quote(""));
        assert_eq!(QuoteSize::Xl, QuoteSize::for_quote(&"a".repeat(99)));
        assert_eq!(QuoteSize::Lg, QuoteSize::for_quote(&"a".repeat(100)));
        assert_eq!(QuoteSize::Md, QuoteSize::for_quote(&"a".repeat(200)));
        assert_eq!(QuoteSize::Base, QuoteSize::for_quote(&"a".repeat(300)));
        assert_eq!(QuoteSize::Base, QuoteSize::for_quote(&"a".repeat(1000)));
    }

    #[test]
    fn quote_sizes_count_characters_not_bytes() {
        let quote = "é".repeat(99);
        assert_eq!(QuoteSize::Xl, QuoteSize::for_quote(&quote));
    }
}
