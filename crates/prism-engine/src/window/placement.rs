use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Top-left position that centers `window` on a display of size `display`.
///
/// Uses truncating integer division, so an odd leftover pixel goes to the
/// right/bottom. A window larger than the display gets a negative offset.
pub fn centered_position(
    display: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let axis = |outer: u32, inner: u32| {
        let offset = (i64::from(outer) - i64::from(inner)) / 2;
        i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX })
    };

    PhysicalPosition::new(
        axis(display.width, window.width),
        axis(display.height, window.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: PhysicalSize<u32> = PhysicalSize::new(1024, 800);

    #[test]
    fn centers_on_full_hd() {
        let pos = centered_position(PhysicalSize::new(1920, 1080), WINDOW);
        assert_eq!(pos, PhysicalPosition::new(448, 140));
    }

    #[test]
    fn odd_leftover_truncates() {
        let pos = centered_position(PhysicalSize::new(1025, 801), WINDOW);
        assert_eq!(pos, PhysicalPosition::new(0, 0));
    }

    #[test]
    fn display_smaller_than_window() {
        let pos = centered_position(PhysicalSize::new(800, 600), WINDOW);
        assert_eq!(pos, PhysicalPosition::new(-112, -100));
    }

    #[test]
    fn same_inputs_same_position() {
        let display = PhysicalSize::new(2560, 1440);
        assert_eq!(
            centered_position(display, WINDOW),
            centered_position(display, WINDOW)
        );
    }
}
