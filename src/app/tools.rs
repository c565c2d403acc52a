/// Shapes offered by the shape dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Oval,
    Line,
    Diamond,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Rectangle,
        ShapeKind::Oval,
        ShapeKind::Line,
        ShapeKind::Diamond,
        ShapeKind::Star,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Oval => "Oval",
            ShapeKind::Line => "Line",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Star => "Star",
        }
    }
}

/// Whether the left button draws new shapes or moves existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Draw,
    Move,
}

impl InteractionMode {
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Draw => InteractionMode::Move,
            InteractionMode::Move => InteractionMode::Draw,
        }
    }

    /// Caption of the button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            InteractionMode::Draw => "Switch to Move Mode",
            InteractionMode::Move => "Switch to Add Mode",
        }
    }

    pub fn bindings(self) -> PointerBindings {
        match self {
            InteractionMode::Draw => PointerBindings {
                primary_press: PressAction::StartDraw,
                primary_drag: DragAction::DrawShape,
                primary_release: ReleaseAction::FinishDraw,
                secondary_press: PressAction::SelectShape,
            },
            InteractionMode::Move => PointerBindings {
                primary_press: PressAction::SelectShape,
                primary_drag: DragAction::MoveShape,
                primary_release: ReleaseAction::FinishMove,
                secondary_press: PressAction::SelectShape,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    StartDraw,
    SelectShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    DrawShape,
    MoveShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    FinishDraw,
    FinishMove,
}

/// Which controller operation each pointer gesture on the canvas triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerBindings {
    pub primary_press: PressAction,
    pub primary_drag: DragAction,
    pub primary_release: ReleaseAction,
    pub secondary_press: PressAction,
}
