//! Owner-drawn row rendering.
//!
//! The host paints the popup list one row at a time and hands each row to
//! [`MruComboBox::draw_item`](crate::MruComboBox::draw_item) together with a
//! [`RowPainter`] that wraps its drawing surface. A row is laid out as:
//!
//! ```text
//! +---------------------------------------+--------+
//! | item text                             |  [x]   |
//! +---------------------------------------+--------+
//!   bounds narrowed by one row height       reserved
//! ```

use mru_combo_core::{Color, Font, Rect, Size};

/// Drawing operations the host surface provides for one row.
pub trait RowPainter {
    /// Paint the row background, highlighted when `selected`.
    fn fill_background(&mut self, bounds: Rect, color: Color, selected: bool);

    /// Draw `text` left-aligned and clipped to `bounds`.
    fn draw_text(&mut self, text: &str, font: &Font, color: Color, bounds: Rect);

    /// Draw the delete icon into `rect`.
    fn draw_delete_icon(&mut self, rect: Rect);
}

/// Per-row paint request from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItemEvent {
    /// Row index; negative for the edit portion of the combo box.
    pub index: i32,
    /// Row bounds in popup list coordinates.
    pub bounds: Rect,
    /// Font to draw the item text with.
    pub font: Font,
    /// Text color.
    pub fore_color: Color,
    /// Background color.
    pub back_color: Color,
    /// Whether the row is highlighted.
    pub selected: bool,
}

impl DrawItemEvent {
    /// Create a request for `index` with default font and colors.
    pub fn new(index: i32, bounds: Rect) -> Self {
        Self {
            index,
            bounds,
            font: Font::default(),
            fore_color: Color::BLACK,
            back_color: Color::WHITE,
            selected: false,
        }
    }

    /// Set the text and background colors using builder pattern.
    pub fn with_colors(mut self, fore_color: Color, back_color: Color) -> Self {
        self.fore_color = fore_color;
        self.back_color = back_color;
        self
    }

    /// Mark the row highlighted using builder pattern.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Geometry of one painted row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    /// Where the item text goes.
    pub text_bounds: Rect,
    /// Where the delete icon goes; also its hit region.
    pub delete_rect: Rect,
}

impl RowLayout {
    /// Lay out a row: the text gets the bounds minus one row height on the
    /// right, and the icon sits at the start of that reserved square, `padding`
    /// below the row's top edge.
    pub fn compute(bounds: Rect, icon_size: Size, padding: f32) -> Self {
        let text_bounds = bounds.shrink_right(bounds.height());
        let delete_rect = Rect::new(
            text_bounds.right(),
            bounds.top() + padding,
            icon_size.width,
            icon_size.height,
        );
        Self {
            text_bounds,
            delete_rect,
        }
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Background { bounds: Rect, color: Color, selected: bool },
    Text { text: String, color: Color, bounds: Rect },
    DeleteIcon { rect: Rect },
}

/// A [`RowPainter`] that records calls instead of drawing.
///
/// Useful for headless hosts and for asserting on row output.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, in order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Texts drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RowPainter for RecordingPainter {
    fn fill_background(&mut self, bounds: Rect, color: Color, selected: bool) {
        self.commands.push(PaintCommand::Background {
            bounds,
            color,
            selected,
        });
    }

    fn draw_text(&mut self, text: &str, _font: &Font, color: Color, bounds: Rect) {
        self.commands.push(PaintCommand::Text {
            text: text.to_owned(),
            color,
            bounds,
        });
    }

    fn draw_delete_icon(&mut self, rect: Rect) {
        self.commands.push(PaintCommand::DeleteIcon { rect });
    }
}
