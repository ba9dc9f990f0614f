//! Character framebuffer the grid view draws into.
//!
//! Everything is addressed in terminal cells. Writes that fall off the buffer
//! are dropped, so drawing code never has to clip first.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Text weight. Terminals treat bold and dim as exclusive in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
}

impl Style {
    /// Light grey on black; what a freshly reset buffer is filled with.
    pub const PLAIN: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            weight: Weight::Normal,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: Weight::Bold,
            ..self
        }
    }

    pub const fn dim(self) -> Self {
        Self {
            weight: Weight::Dim,
            ..self
        }
    }
}

/// One terminal cell: a character and how to paint it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        style: Style::PLAIN,
    };
}

/// Row-major grid of glyphs sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the buffer at a (possibly new) size, keeping the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(usize::from(width) * usize::from(height), Glyph::BLANK);
    }

    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        if y >= self.height {
            return None;
        }
        let start = usize::from(y) * usize::from(self.width);
        self.glyphs.get(start..start + usize::from(self.width))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y)?.get(usize::from(x)).copied()
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = usize::from(y) * usize::from(self.width) + usize::from(x);
        self.glyphs[i] = Glyph { ch, style };
    }

    /// Returns the column after the last char written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) -> u16 {
        let mut cx = x;
        for ch in s.chars().take(usize::from(self.width.saturating_sub(x))) {
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Decimal digits of `value`, without going through `String`.
    pub fn put_u64(&mut self, x: u16, y: u16, mut value: u64, style: Style) -> u16 {
        let mut digits = [0u8; 20];
        let mut start = digits.len();
        loop {
            start -= 1;
            digits[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in &digits[start..] {
            self.put_char(cx, y, char::from(d), style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Repeat `ch` across `len` columns of one row.
    pub fn fill_span(&mut self, x: u16, y: u16, len: u16, ch: char, style: Style) {
        let end = x.saturating_add(len).min(self.width);
        for cx in x..end {
            self.put_char(cx, y, ch, style);
        }
    }

    /// Characters only, one line per row. Handy in tests.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.glyphs.len() + usize::from(self.height));
        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                out.extend(row.iter().map(|g| g.ch));
            }
            out.push('\n');
        }
        out
    }
}
