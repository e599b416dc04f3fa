/// Figure title: `"{prefix} - {W}x{H} - Tempo: {T:.2}s"`.
pub fn format_title(prefix: &str, width: usize, height: usize, elapsed_seconds: f64) -> String {
    format!("{prefix} - {width}x{height} - Tempo: {elapsed_seconds:.2}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_two_decimals() {
        assert_eq!(
            format_title("Fractal de Newton", 100, 100, 3.14159),
            "Fractal de Newton - 100x100 - Tempo: 3.14s"
        );
    }

    #[test]
    fn test_title_pads_and_rounds() {
        assert_eq!(
            format_title("Fractal de Newton", 3, 2, 1.5),
            "Fractal de Newton - 3x2 - Tempo: 1.50s"
        );
        assert_eq!(format_title("X", 4000, 8000, 812.3456), "X - 4000x8000 - Tempo: 812.35s");
    }
}
