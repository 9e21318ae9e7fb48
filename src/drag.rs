//! Drag-and-drop capability sets.
//!
//! Project items are drag sources, project lists are drop targets. UI event
//! handlers go through [`DragRole::dispatch`] so each phase only reaches a
//! participant that implements the matching capability.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Start,
    End,
    Over,
    Leave,
    Drop,
}

pub trait Draggable {
    fn drag_start_handler(&self);
    fn drag_end_handler(&self);
}

pub trait DragTarget {
    fn drag_over_handler(&mut self);
    fn drop_handler(&mut self);
    fn drag_leave_handler(&mut self);
}

pub enum DragRole<'a> {
    Source(&'a dyn Draggable),
    Target(&'a mut dyn DragTarget),
}

impl DragRole<'_> {
    /// Routes `phase` to the matching handler. Returns false when this role
    /// has no handler for the phase.
    pub fn dispatch(self, phase: DragPhase) -> bool {
        match (self, phase) {
            (Self::Source(source), DragPhase::Start) => source.drag_start_handler(),
            (Self::Source(source), DragPhase::End) => source.drag_end_handler(),
            (Self::Target(target), DragPhase::Over) => target.drag_over_handler(),
            (Self::Target(target), DragPhase::Leave) => target.drag_leave_handler(),
            (Self::Target(target), DragPhase::Drop) => target.drop_handler(),
            (role, phase) => {
                tracing::trace!(role = role.name(), ?phase, "drag phase ignored");
                return false;
            }
        }
        true
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Source(_) => "source",
            Self::Target(_) => "target",
        }
    }
}
