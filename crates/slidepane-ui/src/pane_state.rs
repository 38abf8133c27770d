//! The pane's position state, with explicit write authorship.
//!
//! `current_offset` has two writers over a drag cycle: the gesture path while
//! dragging, the spring path while settling. Authorship makes that hand-off
//! explicit; only the currently granted author may write.

/// Who is allowed to write the pane offset right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetAuthor {
    Nobody,
    Gesture,
    Spring,
}

/// Horizontal position state for one pane.
///
/// `rest_offset` and `width` are fixed at construction; `current_offset`
/// moves over the drag cycle.
#[derive(Debug, Clone)]
pub struct PaneState {
    current_offset: f32,
    rest_offset: f32,
    width: f32,
    author: OffsetAuthor,
}

impl PaneState {
    pub fn new(rest_offset: f32, width: f32) -> Self {
        if width <= 0.0 {
            log::warn!("pane width {width} is not positive; resistance will be degenerate");
        }
        Self {
            current_offset: rest_offset,
            rest_offset,
            width,
            author: OffsetAuthor::Nobody,
        }
    }

    /// Hands offset authorship to `author`. Called at phase transitions.
    pub fn grant(&mut self, author: OffsetAuthor) {
        self.author = author;
    }

    /// Writes the offset on behalf of `author`. A write by anyone other than
    /// the granted author is a phase-ownership bug; it is rejected and
    /// logged rather than corrupting the position.
    pub fn write_offset(&mut self, author: OffsetAuthor, value: f32) {
        if author != self.author {
            log::warn!(
                "offset write by {:?} while {:?} holds authorship, ignoring",
                author,
                self.author
            );
            return;
        }
        self.current_offset = value;
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    pub fn rest_offset(&self) -> f32 {
        self.rest_offset
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn author(&self) -> OffsetAuthor {
        self.author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest_with_no_author() {
        let pane = PaneState::new(12.0, 320.0);
        assert_eq!(pane.current_offset(), 12.0);
        assert_eq!(pane.author(), OffsetAuthor::Nobody);
    }

    #[test]
    fn granted_author_writes() {
        let mut pane = PaneState::new(0.0, 320.0);
        pane.grant(OffsetAuthor::Gesture);
        pane.write_offset(OffsetAuthor::Gesture, -42.0);
        assert_eq!(pane.current_offset(), -42.0);
    }

    #[test]
    fn wrong_author_write_is_rejected() {
        let mut pane = PaneState::new(0.0, 320.0);
        pane.grant(OffsetAuthor::Gesture);
        pane.write_offset(OffsetAuthor::Spring, -42.0);
        assert_eq!(pane.current_offset(), 0.0);
    }

    #[test]
    fn authorship_hand_off_swaps_the_writer() {
        let mut pane = PaneState::new(0.0, 320.0);
        pane.grant(OffsetAuthor::Gesture);
        pane.write_offset(OffsetAuthor::Gesture, -120.0);
        pane.grant(OffsetAuthor::Spring);
        pane.write_offset(OffsetAuthor::Gesture, -1.0);
        pane.write_offset(OffsetAuthor::Spring, -130.0);
        assert_eq!(pane.current_offset(), -130.0);
    }
}
