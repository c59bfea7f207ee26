use log::debug;
use ndshape::{ConstShape, ConstShape2u32};

/// Number of cells in every pattern row.
pub const PATTERN_COLS: u32 = 7;
/// Number of rows in every pattern.
pub const PATTERN_ROWS: u32 = 7;

/// Linear `[col, row]` indexing of a pattern grid. Column is the fastest
/// varying coordinate, so iterating `0..PatternShape::SIZE` walks the grid in
/// row-major order.
pub type PatternShape = ConstShape2u32<{ PATTERN_COLS }, { PATTERN_ROWS }>;

/// The character a miss in the pattern table resolves to.
pub const DEFAULT_SYMBOL: char = '0';

const FILLED: u8 = b'#';

/// A fixed-size bitmap of filled and empty cells for one character.
///
/// Row 0 is the top of the glyph. A `#` marks a filled cell; anything else is
/// empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphPattern {
    symbol: char,
    rows: [&'static str; PATTERN_ROWS as usize],
}

impl GlyphPattern {
    const fn new(symbol: char, rows: [&'static str; PATTERN_ROWS as usize]) -> Self {
        Self { symbol, rows }
    }

    /// The character this pattern draws.
    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        PATTERN_ROWS
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        PATTERN_COLS
    }

    /// The textual rows, top to bottom.
    pub fn lines(&self) -> &[&'static str] {
        &self.rows
    }

    /// Returns `false` for coordinates outside the grid.
    #[inline]
    pub fn is_filled(&self, col: u32, row: u32) -> bool {
        self.rows
            .get(row as usize)
            .and_then(|line| line.as_bytes().get(col as usize))
            .map_or(false, |cell| *cell == FILLED)
    }

    /// Iterates the `[col, row]` coordinates of filled cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        (0..PatternShape::SIZE)
            .map(PatternShape::delinearize)
            .filter(|&[col, row]| self.is_filled(col, row))
    }

    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }
}

static PATTERNS: [GlyphPattern; 9] = [
    GlyphPattern::new(
        '0',
        [
            "  ###  ",
            " ## ## ",
            "##   ##",
            "##   ##",
            "##   ##",
            " ## ## ",
            "  ###  ",
        ],
    ),
    GlyphPattern::new(
        '1',
        [
            "   #   ",
            "  ##   ",
            " # #   ",
            "   #   ",
            "   #   ",
            "   #   ",
            " ##### ",
        ],
    ),
    GlyphPattern::new(
        '2',
        [
            " ##### ",
            "##   ##",
            "     ##",
            " ##### ",
            "##     ",
            "##     ",
            "#######",
        ],
    ),
    GlyphPattern::new(
        '3',
        [
            " ##### ",
            "##   ##",
            "     ##",
            " ##### ",
            "     ##",
            "##   ##",
            " ##### ",
        ],
    ),
    GlyphPattern::new(
        '4',
        [
            "##   ##",
            "##   ##",
            "##   ##",
            "#######",
            "     ##",
            "     ##",
            "     ##",
        ],
    ),
    GlyphPattern::new(
        '5',
        [
            "#######",
            "##     ",
            "##     ",
            "###### ",
            "     ##",
            "##   ##",
            " ##### ",
        ],
    ),
    GlyphPattern::new(
        'A',
        [
            "  ###  ",
            " ## ## ",
            "##   ##",
            "##   ##",
            "#######",
            "##   ##",
            "##   ##",
        ],
    ),
    GlyphPattern::new(
        'B',
        [
            "###### ",
            "##   ##",
            "##   ##",
            "###### ",
            "##   ##",
            "##   ##",
            "###### ",
        ],
    ),
    GlyphPattern::new(
        'C',
        [
            " ##### ",
            "##   ##",
            "##     ",
            "##     ",
            "##     ",
            "##   ##",
            " ##### ",
        ],
    ),
];

/// Characters with a dedicated pattern, in table order.
pub fn supported_characters() -> impl Iterator<Item = char> {
    PATTERNS.iter().map(GlyphPattern::symbol)
}

/// The pattern drawn for characters without their own entry.
pub fn default_pattern() -> &'static GlyphPattern {
    find(DEFAULT_SYMBOL).unwrap_or(&PATTERNS[0])
}

/// Case-insensitive lookup that never fails: characters without an entry get
/// the [`default_pattern`].
pub fn lookup(character: char) -> &'static GlyphPattern {
    match find(character.to_ascii_uppercase()) {
        Some(pattern) => pattern,
        None => {
            debug!(
                "no pattern for {character:?}, falling back to {DEFAULT_SYMBOL:?}"
            );
            default_pattern()
        }
    }
}

/// Exact lookup; does not fold case.
pub fn find(symbol: char) -> Option<&'static GlyphPattern> {
    PATTERNS.iter().find(|pattern| pattern.symbol == symbol)
}
