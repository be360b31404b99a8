//! Pointer-driven 3D tilt math, free of any rendering surface.

/// Divisor used by the project and achievement cards.
pub const CARD_TILT_DIVISOR: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltModel {
    /// Offset from the centre in pixels divided by a constant.
    Divisor(f64),
    /// Offset normalised to the half-size, scaled to a maximum angle in degrees.
    Amplitude(f64),
}

impl Default for TiltModel {
    fn default() -> Self {
        Self::Divisor(CARD_TILT_DIVISOR)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Rotation {
    pub const ZERO: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn css(&self) -> String {
        format!(
            "rotateY({:.2}deg) rotateX({:.2}deg)",
            self.rotate_y, self.rotate_x
        )
    }
}

/// Converts a pointer position relative to the container's top-left corner
/// into rotation angles.
pub fn tilt(model: TiltModel, pointer: (f64, f64), size: (f64, f64)) -> Rotation {
    let (width, height) = size;
    if width <= 0.0 || height <= 0.0 {
        return Rotation::ZERO;
    }
    let dx = pointer.0 - width / 2.0;
    let dy = pointer.1 - height / 2.0;
    match model {
        TiltModel::Divisor(d) if d != 0.0 => Rotation {
            rotate_x: dy / d,
            rotate_y: dx / d,
        },
        TiltModel::Divisor(_) => Rotation::ZERO,
        TiltModel::Amplitude(a) => Rotation {
            rotate_x: -(dy / (height / 2.0)) * a,
            rotate_y: (dx / (width / 2.0)) * a,
        },
    }
}

/// Translate/rotate declared by a card item, applied only while hovered.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ItemOffset {
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
}

impl ItemOffset {
    pub fn lift(translate_z: f64) -> Self {
        Self {
            translate_z,
            ..Self::default()
        }
    }

    pub fn css(&self, active: bool) -> String {
        let o = if active { *self } else { Self::default() };
        format!(
            "translateX({}px) translateY({}px) translateZ({}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            o.translate_x, o.translate_y, o.translate_z, o.rotate_x, o.rotate_y, o.rotate_z
        )
    }
}

/// Coalesces pointer moves so at most one transform write happens per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// True when the caller should request a new animation frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn fire(&mut self) {
        self.pending = false;
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
