//! Pointer and touch input
//!
//! Input is last-value-wins: every movement event repositions the human
//! paddle immediately, nothing is queued for the next tick.

/// Where movement events come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `mousemove`, using `clientY` relative to the board
    Mouse,
    /// `touchmove`, using the first touch's `pageY`
    Touch,
}

impl InputMode {
    /// Pick the input mode from a browser user agent string
    pub fn detect(user_agent: &str) -> Self {
        const MOBILE: [&str; 4] = ["iPad", "iPod", "iPhone", "Android"];
        if MOBILE.iter().any(|m| user_agent.contains(m)) {
            InputMode::Touch
        } else {
            InputMode::Mouse
        }
    }
}

/// Convert a mouse `clientY` into field coordinates.
///
/// `board_offset_top` is the board element's `offsetTop`; the extra unit
/// accounts for the board's border.
pub fn mouse_to_field_y(client_y: f32, board_offset_top: f32) -> f32 {
    client_y - (board_offset_top + 1.0)
}

/// Paddle top edge that centers a paddle of `paddle_length` on `y`
pub fn paddle_top_for(y: f32, paddle_length: f32) -> f32 {
    y - paddle_length / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mobile() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        assert_eq!(InputMode::detect(ua), InputMode::Touch);
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8)";
        assert_eq!(InputMode::detect(ua), InputMode::Touch);
    }

    #[test]
    fn test_detect_desktop() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
        assert_eq!(InputMode::detect(ua), InputMode::Mouse);
    }

    #[test]
    fn test_mouse_offset() {
        assert_eq!(mouse_to_field_y(250.0, 49.0), 200.0);
    }

    #[test]
    fn test_paddle_centering() {
        assert_eq!(paddle_top_for(200.0, 100.0), 150.0);
    }
}
