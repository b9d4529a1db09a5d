//! Konami code easter egg
//!
//! Independent of the game: watches key presses for the classic ten-key
//! sequence and raises a short-lived flag when it is entered.

/// Keys that take part in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    A,
    B,
}

impl Key {
    /// Map a DOM `keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            40 => Some(Key::Down),
            65 => Some(Key::A),
            66 => Some(Key::B),
            _ => None,
        }
    }
}

pub const KONAMI_CODE: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::B,
    Key::A,
];

/// Tracks progress through the sequence
#[derive(Debug, Default, Clone)]
pub struct KonamiMatcher {
    position: usize,
}

impl KonamiMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Feed one key press (`None` for keys outside the map).
    ///
    /// Returns true when this press completes the sequence. A wrong key
    /// drops progress back to zero; it does not count as a fresh start.
    pub fn press(&mut self, key: Option<Key>) -> bool {
        if key == Some(KONAMI_CODE[self.position]) {
            self.position += 1;
            if self.position == KONAMI_CODE.len() {
                self.position = 0;
                return true;
            }
        } else {
            self.position = 0;
        }
        false
    }

    pub fn press_code(&mut self, key_code: u32) -> bool {
        self.press(Key::from_key_code(key_code))
    }
}

/// Time-limited visual flag raised by the easter egg
#[derive(Debug, Clone)]
pub struct CheatFlag {
    duration_ms: f64,
    shown_until: Option<f64>,
}

impl CheatFlag {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms as f64,
            shown_until: None,
        }
    }

    pub fn activate(&mut self, now_ms: f64) {
        self.shown_until = Some(now_ms + self.duration_ms);
    }

    pub fn is_shown(&self, now_ms: f64) -> bool {
        self.shown_until.is_some_and(|until| now_ms < until)
    }

    /// Clear the flag once it has run out. Returns true if it was cleared.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        match self.shown_until {
            Some(until) if now_ms >= until => {
                self.shown_until = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

    #[test]
    fn test_exact_sequence_fires_once() {
        let mut m = KonamiMatcher::new();
        let fired: Vec<bool> = CODES.iter().map(|&c| m.press_code(c)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[9]);
        assert_eq!(m.position(), 0);
    }

    #[test]
    fn test_sequence_can_repeat() {
        let mut m = KonamiMatcher::new();
        for _ in 0..2 {
            let last = CODES.iter().map(|&c| m.press_code(c)).last();
            assert_eq!(last, Some(true));
        }
    }

    #[test]
    fn test_any_deviation_resets() {
        for wrong_at in 0..CODES.len() {
            let mut m = KonamiMatcher::new();
            for &c in &CODES[..wrong_at] {
                assert!(!m.press_code(c));
            }
            // 'x' is not in the key map at all
            assert!(!m.press_code(88));
            assert_eq!(m.position(), 0, "deviation at {}", wrong_at);
        }
    }

    #[test]
    fn test_wrong_mapped_key_resets() {
        let mut m = KonamiMatcher::new();
        m.press(Some(Key::Up));
        m.press(Some(Key::Up));
        // Third Up is a mismatch, not a restart at position 1
        assert!(!m.press(Some(Key::Up)));
        assert_eq!(m.position(), 0);
    }

    #[test]
    fn test_cheat_flag_duration() {
        let mut flag = CheatFlag::new(4000);
        assert!(!flag.is_shown(0.0));

        flag.activate(1000.0);
        assert!(flag.is_shown(1000.0));
        assert!(flag.is_shown(4999.0));
        assert!(!flag.expire(4999.0));
        assert!(!flag.is_shown(5000.0));
        assert!(flag.expire(5000.0));
        assert!(!flag.expire(6000.0));
    }
}
