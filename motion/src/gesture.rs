//! Pointer state for hover/press feedback

/// what the pointer is doing to an interactive element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pointer {
    pub hovered: bool,
    pub pressed: bool,
}

impl Pointer {
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// leaving also cancels a press in progress
    pub fn leave(&mut self) {
        self.hovered = false;
        self.pressed = false;
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }
}

/// values a pointer state animates toward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTargets {
    pub rest: f64,
    pub hover: f64,
    pub press: f64,
}

impl GestureTargets {
    /// press wins over hover
    pub fn target_scale(&self, pointer: Pointer) -> f64 {
        if pointer.pressed {
            self.press
        } else if pointer.hovered {
            self.hover
        } else {
            self.rest
        }
    }

    /// hover glow strength, 0 or 1; it stays on while pressing a hovered element
    pub fn glow(&self, pointer: Pointer) -> f64 {
        if pointer.hovered {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: GestureTargets = GestureTargets { rest: 1.0, hover: 1.02, press: 0.98 };

    #[test]
    fn test_targets() {
        let mut pointer = Pointer::default();
        assert_eq!(TARGETS.target_scale(pointer), 1.0);

        pointer.enter();
        assert_eq!(TARGETS.target_scale(pointer), 1.02);
        assert_eq!(TARGETS.glow(pointer), 1.0);

        pointer.press();
        assert_eq!(TARGETS.target_scale(pointer), 0.98);
        assert_eq!(TARGETS.glow(pointer), 1.0);

        pointer.release();
        assert_eq!(TARGETS.target_scale(pointer), 1.02);
    }

    #[test]
    fn test_leave_cancels_press() {
        let mut pointer = Pointer::default();
        pointer.enter();
        pointer.press();
        pointer.leave();
        assert_eq!(pointer, Pointer::default());
        assert_eq!(TARGETS.target_scale(pointer), 1.0);
        assert_eq!(TARGETS.glow(pointer), 0.0);
    }

    #[test]
    fn test_touch_press_without_hover() {
        let mut pointer = Pointer::default();
        pointer.press();
        assert_eq!(TARGETS.target_scale(pointer), 0.98);
        assert_eq!(TARGETS.glow(pointer), 0.0);
    }
}
