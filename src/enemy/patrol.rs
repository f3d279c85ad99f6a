use super::Enemy;
use crate::math::{contains, Rect};

impl Enemy {
    /// Advances along the patrol axis. If the move would leave `home`, it is
    /// undone and the facing flips for the next tick. Returns `true` on a
    /// bounce.
    pub fn patrol(&mut self, dt: f32, home: &Rect) -> bool {
        let dx = self.speed * self.facing.sign() * dt;
        let before = self.rect.x;
        self.rect.x += dx;
        if contains(&self.rect, home) {
            return false;
        }
        self.rect.x = before;
        self.facing = self.facing.flipped();
        true
    }
}
