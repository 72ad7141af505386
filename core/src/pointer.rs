//! Pointer-driven card and button effects.

pub const MAX_TILT_DEG: f64 = 10.0;

/// Position of a pointer event relative to an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    pub fn from_client(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilts toward the pointer, `MAX_TILT_DEG` at the edges.
    pub fn toward(point: LocalPoint, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return Self::FLAT;
        }
        Self {
            rotate_x: (point.y - center_y) / center_y * MAX_TILT_DEG,
            rotate_y: (point.x - center_x) / center_x * -MAX_TILT_DEG,
        }
    }

    pub fn to_css(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.rotate_x, self.rotate_y)
    }
}

/// Background for the hero button's hover glow.
pub fn glow_gradient(point: LocalPoint, color: &str) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, {color}, {color}, transparent 20%)",
        point.x, point.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_tilt_to_the_limit() {
        let top_left = Tilt::toward(LocalPoint { x: 0.0, y: 0.0 }, 400.0, 300.0);
        assert_eq!(top_left, Tilt { rotate_x: -10.0, rotate_y: 10.0 });

        let bottom_right = Tilt::toward(LocalPoint { x: 400.0, y: 300.0 }, 400.0, 300.0);
        assert_eq!(bottom_right, Tilt { rotate_x: 10.0, rotate_y: -10.0 });

        let center = Tilt::toward(LocalPoint { x: 200.0, y: 150.0 }, 400.0, 300.0);
        assert_eq!(center, Tilt::FLAT);
        assert_eq!(top_left.to_css(), "rotateX(-10deg) rotateY(10deg)");
    }

    #[test]
    fn degenerate_box_stays_flat() {
        assert_eq!(Tilt::toward(LocalPoint { x: 5.0, y: 5.0 }, 0.0, 0.0), Tilt::FLAT);
    }

    #[test]
    fn glow_follows_pointer() {
        let point = LocalPoint::from_client(130.0, 48.5, 100.0, 40.0);
        assert_eq!(
            glow_gradient(point, "#00caeb"),
            "radial-gradient(circle at 30px 8.5px, #00caeb, #00caeb, transparent 20%)"
        );
    }
}
