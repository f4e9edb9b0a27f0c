use thiserror::Error;

/// Timer-driven advances fire every five seconds, matching the pacing of
/// the hero rotation on the live site.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("slideshow needs at least one slide")]
    EmptyDeck,
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Rotation state for the hero carousel: the active slide index plus the
/// autoplay flag. Slide payloads stay with the caller; only their count
/// matters here.
///
/// Any manual move turns autoplay off for good; only an explicit
/// [`Slideshow::toggle_autoplay`] brings it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    current: usize,
    autoplay: bool,
}

impl Slideshow {
    pub fn new(len: usize) -> Result<Self, SlideshowError> {
        if len == 0 {
            return Err(SlideshowError::EmptyDeck);
        }
        Ok(Self {
            len,
            current: 0,
            autoplay: true,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn advance_next(&mut self) {
        self.current = (self.current + 1) % self.len;
        self.autoplay = false;
    }

    pub fn advance_previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
        self.autoplay = false;
    }

    /// Jump straight to `index`. Out-of-range input leaves the state
    /// untouched so the caller's bug stays visible instead of being
    /// clamped away.
    pub fn go_to(&mut self, index: usize) -> Result<(), SlideshowError> {
        if index >= self.len {
            return Err(SlideshowError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        self.autoplay = false;
        Ok(())
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
    }

    /// Timer-driven advance. Unlike the manual calls this never touches
    /// the autoplay flag, and a tick racing a just-cancelled timer is a
    /// no-op.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.current = (self.current + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck_rejected() {
        assert_eq!(Slideshow::new(0).unwrap_err(), SlideshowError::EmptyDeck);
    }

    #[test]
    fn test_index_stays_in_range_while_wrapping() {
        let mut show = Slideshow::new(3).unwrap();
        for _ in 0..7 {
            show.advance_next();
            assert!(show.current_index() < show.slide_count());
        }
        assert_eq!(show.current_index(), 1);

        let mut show = Slideshow::new(3).unwrap();
        show.advance_previous();
        assert_eq!(show.current_index(), 2);
        show.advance_previous();
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn test_manual_navigation_disables_autoplay() {
        let mut show = Slideshow::new(3).unwrap();
        show.advance_next();
        assert!(!show.autoplay_enabled());

        let mut show = Slideshow::new(3).unwrap();
        show.advance_previous();
        assert!(!show.autoplay_enabled());

        let mut show = Slideshow::new(3).unwrap();
        show.go_to(1).unwrap();
        assert!(!show.autoplay_enabled());
    }

    #[test]
    fn test_tick_advances_without_touching_autoplay() {
        let mut show = Slideshow::new(3).unwrap();
        show.tick();
        assert_eq!(show.current_index(), 1);
        assert!(show.autoplay_enabled());
    }

    #[test]
    fn test_tick_is_noop_once_autoplay_off() {
        let mut show = Slideshow::new(3).unwrap();
        show.advance_next();
        show.tick();
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut show = Slideshow::new(1).unwrap();
        show.tick();
        show.advance_next();
        show.advance_previous();
        assert_eq!(show.current_index(), 0);
    }

    #[test]
    fn test_two_steps_land_on_third_slide() {
        let mut show = Slideshow::new(3).unwrap();
        show.advance_next();
        show.advance_next();
        assert_eq!(show.current_index(), 2);
        assert!(!show.autoplay_enabled());
    }

    #[test]
    fn test_out_of_range_jump_leaves_state_alone() {
        let mut show = Slideshow::new(3).unwrap();
        let err = show.go_to(5).unwrap_err();
        assert_eq!(err, SlideshowError::IndexOutOfRange { index: 5, len: 3 });
        assert_eq!(show.current_index(), 0);
        assert!(show.autoplay_enabled());
    }

    #[test]
    fn test_toggle_reenables_autoplay() {
        let mut show = Slideshow::new(2).unwrap();
        show.advance_next();
        assert!(!show.autoplay_enabled());
        show.toggle_autoplay();
        assert!(show.autoplay_enabled());
        show.tick();
        assert_eq!(show.current_index(), 0);
    }
}
