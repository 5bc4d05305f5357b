//! Frame: A character-grid render target for composed elements.
//!
//! The frame projects an [`Element`] tree into styled cells. A section is
//! drawn as a one-row header (its static label) split off the top of its
//! region, with the main slot below. The centered shell centers its slot's
//! content block inside the main region; every other shell stacks top-down.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::element::Element;
use crate::layout::{Rect, CENTERED_LABEL};
use crate::style::{Modifiers, Rgb};

/// Render configuration for the frame.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Header label text color.
    pub header_fg: Rgb,
    /// Header row background.
    pub header_bg: Rgb,
    /// Header label modifiers.
    pub header_modifiers: Modifiers,
    /// Body text color.
    pub body_fg: Rgb,
    /// Body background.
    pub body_bg: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_fg: Rgb::WHITE,
            header_bg: Rgb::new(40, 40, 40),
            header_modifiers: Modifiers::BOLD,
            body_fg: Rgb::DEFAULT_FG,
            body_bg: Rgb::DEFAULT_BG,
        }
    }
}

/// A single styled cell in the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Grapheme cluster to display. Empty for the continuation column of a
    /// wide grapheme.
    pub symbol: String,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Style modifiers.
    pub modifiers: Modifiers,
}

impl Cell {
    fn blank(fg: Rgb, bg: Rgb) -> Self {
        Self {
            symbol: " ".to_owned(),
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Whether this cell is the trailing column of a wide grapheme.
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }
}

/// A width × height grid of styled cells.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    theme: Theme,
}

impl Frame {
    /// Create a frame filled with blank body-styled cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_theme(width, height, Theme::default())
    }

    /// Create a frame with a custom theme.
    pub fn with_theme(width: u16, height: u16, theme: Theme) -> Self {
        let blank = Cell::blank(theme.body_fg, theme.body_bg);
        Self {
            width,
            height,
            cells: vec![blank; width as usize * height as usize],
            theme,
        }
    }

    /// Frame width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Frame height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The frame's full area as a rectangle.
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Reset every cell to the blank body style.
    pub fn clear(&mut self) {
        let blank = Cell::blank(self.theme.body_fg, self.theme.body_bg);
        self.cells.fill(blank);
    }

    /// Get the cell at (x, y), if in bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells[idx] = cell;
    }

    /// The visible text of one row, trailing blanks trimmed.
    ///
    /// Continuation columns of wide graphemes contribute nothing.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                out.push_str(&cell.symbol);
            }
        }
        out.trim_end().to_owned()
    }

    /// Project an element tree into the given region of the frame.
    ///
    /// Regions outside the frame are clipped; drawing never fails.
    pub fn draw(&mut self, element: &Element, area: Rect) {
        if area.is_empty() {
            return;
        }
        match element {
            Element::Text(content) => {
                let lines = wrap(content, area.width);
                for (row, line) in lines.iter().enumerate().take(area.height as usize) {
                    #[allow(clippy::cast_possible_truncation)]
                    let y = area.y + row as u16;
                    self.draw_span(area.x, y, area.right(), line, self.theme.body_fg, self.theme.body_bg, Modifiers::empty());
                }
            }
            Element::Stack(children) => {
                let mut y = area.y;
                for child in children {
                    if y >= area.bottom() {
                        break;
                    }
                    let (_, child_height) = measure(child, area.width);
                    let remaining = area.bottom() - y;
                    let slot = Rect::new(area.x, y, area.width, child_height.min(remaining));
                    self.draw(child, slot);
                    y = y.saturating_add(child_height);
                }
            }
            Element::Section { header, main } => {
                let (header_row, main_area) = area.split_vertical(1);
                self.draw_header(header, header_row);
                if main_area.is_empty() {
                    return;
                }
                if header == CENTERED_LABEL {
                    let (block_width, block_height) = measure(main, main_area.width);
                    self.draw(main, main_area.center(block_width, block_height));
                } else {
                    self.draw(main, main_area);
                }
            }
        }
    }

    fn draw_header(&mut self, label: &str, row: Rect) {
        if row.is_empty() {
            return;
        }
        for x in row.x..row.right() {
            self.set(x, row.y, Cell::blank(self.theme.header_fg, self.theme.header_bg));
        }
        self.draw_span(
            row.x,
            row.y,
            row.right(),
            label,
            self.theme.header_fg,
            self.theme.header_bg,
            self.theme.header_modifiers,
        );
    }

    /// Paint one line of graphemes starting at (x, y), clipped at `max_x`.
    #[allow(clippy::too_many_arguments)]
    fn draw_span(&mut self, x: u16, y: u16, max_x: u16, text: &str, fg: Rgb, bg: Rgb, modifiers: Modifiers) {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            #[allow(clippy::cast_possible_truncation)]
            let width = grapheme.width() as u16;
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > max_x {
                break;
            }
            self.set(
                col,
                y,
                Cell {
                    symbol: grapheme.to_owned(),
                    fg,
                    bg,
                    modifiers,
                },
            );
            // Wide graphemes own their trailing column.
            for cont in 1..width {
                self.set(
                    col + cont,
                    y,
                    Cell {
                        symbol: String::new(),
                        fg,
                        bg,
                        modifiers,
                    },
                );
            }
            col += width;
        }
    }

    /// Iterate the cells of one row (used by the ANSI presenter).
    pub(crate) fn row(&self, y: u16) -> impl Iterator<Item = &Cell> {
        (0..self.width).filter_map(move |x| self.get(x, y))
    }
}

/// Split text on newlines and hard-wrap each line by display width.
fn wrap(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut current = String::new();
        let mut current_width: u16 = 0;
        for grapheme in raw.graphemes(true) {
            #[allow(clippy::cast_possible_truncation)]
            let gw = grapheme.width() as u16;
            if current_width.saturating_add(gw) > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += gw;
        }
        lines.push(current);
    }
    lines
}

/// Measure an element's content block at the given wrap width.
///
/// Returns (block width, block height) in cells. The block width is the
/// widest wrapped line; sections add one header row.
fn measure(element: &Element, width: u16) -> (u16, u16) {
    match element {
        Element::Text(content) => {
            let lines = wrap(content, width);
            #[allow(clippy::cast_possible_truncation)]
            let block_width = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0);
            #[allow(clippy::cast_possible_truncation)]
            let block_height = lines.len() as u16;
            (block_width, block_height)
        }
        Element::Stack(children) => {
            let mut block_width = 0;
            let mut block_height: u16 = 0;
            for child in children {
                let (w, h) = measure(child, width);
                block_width = block_width.max(w);
                block_height = block_height.saturating_add(h);
            }
            (block_width, block_height)
        }
        Element::Section { header, main } => {
            let (w, h) = measure(main, width);
            #[allow(clippy::cast_possible_truncation)]
            let label_width = (header.width() as u16).min(width);
            (w.max(label_width), h.saturating_add(1))
        }
    }
}
