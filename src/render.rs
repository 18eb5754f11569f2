use crate::epidemic::Compartment;
use crate::geometry::Rect;
use crate::prelude::Real;

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Same color with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Color {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    // Named palette used by the overlay and the compartment mapping.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
}

/// Display color for each compartment. The match is exhaustive on purpose:
/// adding a compartment without picking a color becomes a compile error
/// instead of a silent gray fallback.
pub fn compartment_color(state: Compartment) -> Color {
    match state {
        Compartment::Susceptible => Color::BLUE,
        Compartment::Exposed => Color::ORANGE,
        Compartment::Infected => Color::RED,
        Compartment::Recovered => Color::GREEN,
        Compartment::Quarantined => Color::PURPLE,
        Compartment::Hospitalized => Color::BROWN,
        Compartment::Vaccinated => Color::CYAN,
    }
}

/// Surface dimensions for the viewport breakpoints served by the client.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Viewport {
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    /// Width and height of the primary drawing surface at this breakpoint.
    pub fn size(self) -> (Real, Real) {
        match self {
            Viewport::Desktop => (700.0, 500.0),
            Viewport::Tablet => (560.0, 400.0),
            Viewport::Mobile => (340.0, 280.0),
        }
    }
}

/// Drawing surface the simulation renders into. Hosts implement this over
/// their actual canvas; the engine only issues primitive calls and never
/// touches the surface outside the render phase.
pub trait Surface {
    fn width(&self) -> Real;
    fn height(&self) -> Real;
    fn clear(&mut self);
    fn fill_circle(&mut self, x: Real, y: Real, radius: Real, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn text(&mut self, text: &str, x: Real, y: Real, color: Color);
}

/// One primitive captured by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    Circle {
        x: Real,
        y: Real,
        radius: Real,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        x: Real,
        y: Real,
        color: Color,
    },
}

/// Surface that records draw commands instead of rasterizing them. Used by
/// tests and by headless hosts that forward primitives elsewhere.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: Real,
    height: Real,
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: Real, height: Real) -> Self {
        RecordingSurface {
            width,
            height,
            commands: vec![],
        }
    }

    /// Everything drawn since construction or the last `take_commands`.
    pub fn commands(&self) -> &[DrawCmd] {
        self.commands.as_slice()
    }

    /// Drain the recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::replace(&mut self.commands, vec![])
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> Real {
        self.width
    }

    fn height(&self) -> Real {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_circle(&mut self, x: Real, y: Real, radius: Real, color: Color) {
        self.commands.push(DrawCmd::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCmd::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCmd::StrokeRect { rect, color });
    }

    fn text(&mut self, text: &str, x: Real, y: Real, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }
}
