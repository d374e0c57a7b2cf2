/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Margin color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_margin(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Burn percentage color: under 90% of estimate is green, 90–100% yellow,
/// over the estimate red. 0 (no estimate) is greyed out.
pub fn color_for_percent(pct: f64) -> &'static str {
    if pct == 0.0 {
        GREY
    } else if pct < 90.0 {
        GREEN
    } else if pct <= 100.0 {
        YELLOW
    } else {
        RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_colors() {
        assert_eq!(color_for_margin(950.0), GREEN);
        assert_eq!(color_for_margin(-10.0), RED);
        assert_eq!(color_for_margin(0.0), RESET);
    }

    #[test]
    fn percent_colors() {
        assert_eq!(color_for_percent(0.0), GREY);
        assert_eq!(color_for_percent(51.4), GREEN);
        assert_eq!(color_for_percent(95.0), YELLOW);
        assert_eq!(color_for_percent(130.0), RED);
    }
}
