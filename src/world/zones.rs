use crate::math::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRole {
    /// The player's shape may not enter.
    Forbidden,
    /// An enemy patrols inside and turns around at the edges.
    Home,
    /// Reaching it wins the game.
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub rect: Rect,
    pub role: ZoneRole,
}

impl Zone {
    pub fn new(rect: Rect, role: ZoneRole) -> Self {
        Self { rect, role }
    }
}

/// Static zones of a scene plus the one piece of zone state that changes at
/// runtime: whether the target is still sealed off.
#[derive(Debug, Clone)]
pub struct ZoneSet {
    forbidden: Vec<Zone>,
    homes: Vec<Zone>,
    target: Zone,
    target_sealed: bool,
}

impl ZoneSet {
    pub fn new(forbidden: Vec<Rect>, homes: Vec<Rect>, target: Rect) -> Self {
        Self {
            forbidden: forbidden
                .into_iter()
                .map(|r| Zone::new(r, ZoneRole::Forbidden))
                .collect(),
            homes: homes.into_iter().map(|r| Zone::new(r, ZoneRole::Home)).collect(),
            target: Zone::new(target, ZoneRole::Target),
            target_sealed: true,
        }
    }

    /// Forbidden rects in check order; a sealed target comes last.
    pub fn active_forbidden(&self) -> impl Iterator<Item = &Rect> {
        self.forbidden
            .iter()
            .map(|z| &z.rect)
            .chain(self.target_sealed.then_some(&self.target.rect))
    }

    /// Every zone, target last.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.forbidden
            .iter()
            .chain(&self.homes)
            .chain(std::iter::once(&self.target))
    }

    pub fn home(&self, enemy: usize) -> Option<&Rect> {
        self.homes.get(enemy).map(|z| &z.rect)
    }

    pub fn target(&self) -> &Rect {
        &self.target.rect
    }

    pub fn target_sealed(&self) -> bool {
        self.target_sealed
    }

    /// Returns `true` only on the call that actually opens the target.
    pub fn unseal_target(&mut self) -> bool {
        std::mem::replace(&mut self.target_sealed, false)
    }

    pub fn reset(&mut self) {
        self.target_sealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> ZoneSet {
        ZoneSet::new(
            vec![Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 0.0, 10.0, 10.0)],
            vec![Rect::new(0.0, 50.0, 100.0, 10.0)],
            Rect::new(90.0, 90.0, 10.0, 10.0),
        )
    }

    #[test]
    fn sealed_target_is_forbidden_last() {
        let z = zones();
        let active: Vec<_> = z.active_forbidden().copied().collect();
        assert_eq!(active.len(), 3);
        assert_eq!(active[2], *z.target());
    }

    #[test]
    fn unseal_is_idempotent() {
        let mut z = zones();
        assert!(z.unseal_target());
        assert!(!z.unseal_target());
        assert_eq!(z.active_forbidden().count(), 2);
    }

    #[test]
    fn reset_reseals_target() {
        let mut z = zones();
        z.unseal_target();
        z.reset();
        assert!(z.target_sealed());
        assert_eq!(z.active_forbidden().count(), 3);
    }

    #[test]
    fn iter_tags_roles() {
        let z = zones();
        let roles: Vec<_> = z.iter().map(|zone| zone.role).collect();
        assert_eq!(
            roles,
            vec![
                ZoneRole::Forbidden,
                ZoneRole::Forbidden,
                ZoneRole::Home,
                ZoneRole::Target
            ]
        );
    }

    #[test]
    fn home_lookup() {
        let z = zones();
        assert!(z.home(0).is_some());
        assert!(z.home(1).is_none());
    }
}
