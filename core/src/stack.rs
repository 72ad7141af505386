//! Overlapping card stack on the about section. Clicking a card brings it
//! to the front; the rest keep their relative order behind it.

pub const CARD_WIDTH_PX: f64 = 700.0;
pub const STACK_PEEK: f64 = 0.15;
pub const MOBILE_SPACING_PX: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub x_px: f64,
    pub y_px: f64,
    pub scale: f64,
    pub z_index: i32,
}

impl CardPlacement {
    /// Desktop fans cards out to the left, mobile stacks them downwards.
    pub fn at_depth(depth: usize, mobile: bool) -> Self {
        let depth_f = depth as f64;
        Self {
            x_px: if mobile { 0.0 } else { -depth_f * CARD_WIDTH_PX * STACK_PEEK },
            y_px: if mobile { depth_f * MOBILE_SPACING_PX } else { 0.0 },
            scale: 1.0 - depth_f * 0.05,
            z_index: 100 - depth as i32,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({}); z-index: {}; cursor: pointer;",
            self.x_px, self.y_px, self.scale, self.z_index
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStack {
    // card indices, front first
    order: Vec<usize>,
}

impl CardStack {
    pub fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn front(&self) -> Option<usize> {
        self.order.first().copied()
    }

    pub fn bring_forward(&mut self, card: usize) {
        if let Some(position) = self.order.iter().position(|&c| c == card) {
            let card = self.order.remove(position);
            self.order.insert(0, card);
        }
    }

    /// `(card, placement)` pairs, front first.
    pub fn placements(&self, mobile: bool) -> impl Iterator<Item = (usize, CardPlacement)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(move |(depth, &card)| (card, CardPlacement::at_depth(depth, mobile)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_card_moves_to_front() {
        let mut stack = CardStack::new(3);
        stack.bring_forward(2);
        assert_eq!(stack.order(), &[2, 0, 1]);
        stack.bring_forward(1);
        assert_eq!(stack.order(), &[1, 2, 0]);
        stack.bring_forward(1);
        assert_eq!(stack.order(), &[1, 2, 0]);
        stack.bring_forward(9);
        assert_eq!(stack.front(), Some(1));
    }

    #[test]
    fn placement_depends_on_layout() {
        let desktop = CardPlacement::at_depth(2, false);
        assert!((desktop.x_px + 210.0).abs() < 1e-9);
        assert_eq!(desktop.y_px, 0.0);
        assert_eq!(desktop.z_index, 98);
        assert!((desktop.scale - 0.9).abs() < 1e-9);

        let mobile = CardPlacement::at_depth(2, true);
        assert_eq!(mobile.x_px, 0.0);
        assert_eq!(mobile.y_px, 120.0);
    }

    #[test]
    fn placements_follow_stack_order() {
        let mut stack = CardStack::new(3);
        stack.bring_forward(1);
        let cards: Vec<usize> = stack.placements(false).map(|(card, _)| card).collect();
        assert_eq!(cards, vec![1, 0, 2]);
    }
}
