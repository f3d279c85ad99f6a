use crate::item::{GemColor, WinNarrative};

/// What the player has gathered this session.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub lives: u8,
    pub max_lives: u8,
    pub has_key: bool,
    pub has_star: bool,
    /// Gems in pickup order.
    pub gems: Vec<GemColor>,
    gems_for_star: usize,
    start_lives: u8,
}

impl Inventory {
    pub fn new(start_lives: u8, max_lives: u8, gems_for_star: usize) -> Self {
        Self {
            lives: start_lives,
            max_lives,
            has_key: false,
            has_star: false,
            gems: Vec::with_capacity(gems_for_star),
            gems_for_star,
            start_lives,
        }
    }

    /// Removes one life and returns how many remain.
    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Adds a life only while the player is alive and below the cap.
    pub fn restore_life(&mut self) -> bool {
        if self.lives > 0 && self.lives < self.max_lives {
            self.lives += 1;
            true
        } else {
            false
        }
    }

    pub fn add_key(&mut self) {
        self.has_key = true;
    }

    /// Records a gem. Returns `true` when this gem completes the star.
    pub fn add_gem(&mut self, color: GemColor) -> bool {
        self.gems.push(color);
        if !self.has_star && self.gems.len() == self.gems_for_star {
            self.has_star = true;
            return true;
        }
        false
    }

    pub fn gems_for_star(&self) -> usize {
        self.gems_for_star
    }

    pub fn can_unlock_target(&self) -> bool {
        self.has_key && self.has_star
    }

    /// The gem that completed the star, which decides the ending.
    pub fn star_gem(&self) -> Option<GemColor> {
        self.gems_for_star
            .checked_sub(1)
            .and_then(|i| self.gems.get(i))
            .copied()
    }

    pub fn narrative(&self) -> Option<WinNarrative> {
        self.star_gem().map(WinNarrative::from)
    }

    pub fn reset(&mut self) {
        self.lives = self.start_lives;
        self.has_key = false;
        self.has_star = false;
        self.gems.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_starts_empty() {
        let inv = Inventory::new(2, 3, 3);
        assert_eq!(inv.lives, 2);
        assert!(inv.gems.is_empty());
        assert!(!inv.has_key && !inv.has_star);
        assert_eq!(inv.star_gem(), None);
    }

    #[test]
    fn restore_life_respects_bounds() {
        let mut inv = Inventory::new(2, 3, 3);
        assert!(inv.restore_life());
        assert_eq!(inv.lives, 3);
        assert!(!inv.restore_life());
        assert_eq!(inv.lives, 3);

        inv.lives = 0;
        assert!(!inv.restore_life());
        assert_eq!(inv.lives, 0);
    }

    #[test]
    fn lose_life_saturates() {
        let mut inv = Inventory::new(1, 3, 3);
        assert_eq!(inv.lose_life(), 0);
        assert_eq!(inv.lose_life(), 0);
    }

    #[test]
    fn third_gem_completes_star() {
        let mut inv = Inventory::new(2, 3, 3);
        assert!(!inv.add_gem(GemColor::Orange));
        assert!(!inv.add_gem(GemColor::Blue));
        assert!(inv.add_gem(GemColor::Green));
        assert!(inv.has_star);
        assert_eq!(inv.star_gem(), Some(GemColor::Green));
        assert_eq!(inv.narrative(), Some(WinNarrative::Precious));
    }

    #[test]
    fn unlock_needs_key_and_star_in_any_order() {
        let mut inv = Inventory::new(2, 3, 3);
        inv.add_key();
        assert!(!inv.can_unlock_target());
        for color in [GemColor::Blue, GemColor::Green, GemColor::Orange] {
            inv.add_gem(color);
        }
        assert!(inv.can_unlock_target());
    }

    #[test]
    fn reset_clears_everything() {
        let mut inv = Inventory::new(2, 3, 3);
        inv.add_key();
        inv.add_gem(GemColor::Blue);
        inv.lose_life();
        inv.reset();
        assert_eq!(inv, Inventory::new(2, 3, 3));
    }
}
