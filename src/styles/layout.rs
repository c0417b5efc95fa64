use crate::runtime::Color;

/// Cell offsets around a node, in terminal columns and rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spacing {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn horizontal(columns: u16) -> Self {
        Self {
            top: 0,
            right: columns,
            bottom: 0,
            left: columns,
        }
    }

    pub const fn vertical(rows: u16) -> Self {
        Self {
            top: rows,
            right: 0,
            bottom: rows,
            left: 0,
        }
    }

    pub const fn left(columns: u16) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: 0,
            left: columns,
        }
    }

    pub const fn top(rows: u16) -> Self {
        Self {
            top: rows,
            right: 0,
            bottom: 0,
            left: 0,
        }
    }

    pub const fn plus(self, other: Spacing) -> Self {
        Self {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }

    pub fn width(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub fn height(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Borders {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Borders {
    pub const NONE: Borders = Borders {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub const HORIZONTAL: Borders = Borders {
        top: true,
        bottom: true,
        left: false,
        right: false,
    };

    pub fn rows(&self) -> u16 {
        u16::from(self.top) + u16::from(self.bottom)
    }

    pub fn columns(&self) -> u16 {
        u16::from(self.left) + u16::from(self.right)
    }
}

/// Text color and spacing for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub margin: Spacing,
    pub padding: Spacing,
}

impl TextStyle {
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }
}

/// Box decoration for a container: background, borders and spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxStyle {
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub borders: Borders,
    pub margin: Spacing,
    pub padding: Spacing,
}

impl BoxStyle {
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn borders(mut self, borders: Borders, color: Color) -> Self {
        self.borders = borders;
        self.border_color = Some(color);
        self
    }

    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    /// Rows taken by decoration around the child.
    pub fn chrome_rows(&self) -> u16 {
        self.borders
            .rows()
            .saturating_add(self.margin.height())
            .saturating_add(self.padding.height())
    }

    pub fn chrome_columns(&self) -> u16 {
        self.borders
            .columns()
            .saturating_add(self.margin.width())
            .saturating_add(self.padding.width())
    }
}
