use serde::Serialize;

/// High-level action recognized from the pointer stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// A fresh press: halt any running motion
    StopMotion,
    /// The press moved past the touch slop
    DragBegin,
    /// Finger moved by this much since the previous sample
    DragDelta { dx: f32, dy: f32 },
    /// Drag released slowly, or cancelled
    DragEnd,
    /// Drag released fast enough to fling, units/s
    FlingBegin { velocity_x: f32, velocity_y: f32 },
    SingleTap { x: f32, y: f32 },
    DoubleTap { x: f32, y: f32 },
}
