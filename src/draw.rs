use crate::types;

/// Glyphs indexed by visit count, wrapping around for busier cells.
pub const SYMBOLS: [char; 15] = [
    ' ', '.', 'o', '+', '=', '*', 'B', '0', 'X', '@', '%', '&', '#', '/', '^',
];
pub const START_SYMBOL: char = 'S';
pub const END_SYMBOL: char = 'E';

const CORNER: char = '+';
const FILL: char = '-';
const SIDE: char = '|';

pub fn symbol_for(visits: u32) -> char {
    SYMBOLS[visits as usize % SYMBOLS.len()]
}

/// The bracketed title tag, ellipsized when the title won't fit inside the border.
pub fn title_tag(width: u32, title: &str) -> String {
    let len = title.chars().count();
    if len > width.saturating_sub(2) as usize {
        let keep = width.saturating_sub(5) as usize;
        let short: String = title.chars().take(keep).collect();
        format!("[{short}...]")
    } else {
        format!("[{title}]")
    }
}

pub fn top_border(width: u32, title: Option<&str>) -> String {
    let width = width as usize;
    let tag = match title {
        Some(t) => {
            let tag = title_tag(width as u32, t);
            if tag.chars().count() > width {
                tracing::warn!(title = t, width, "title does not fit, drawing a plain border");
                None
            } else {
                Some(tag)
            }
        }
        None => None,
    };

    let mut line = String::with_capacity(width + 2);
    line.push(CORNER);
    match tag {
        Some(tag) => {
            let margin = width - tag.chars().count();
            let left = margin / 2 + (margin & width & 1);
            line.extend(std::iter::repeat_n(FILL, left));
            line.push_str(&tag);
            line.extend(std::iter::repeat_n(FILL, margin - left));
        }
        None => line.extend(std::iter::repeat_n(FILL, width)),
    }
    line.push(CORNER);
    line
}

pub fn bottom_border(width: u32) -> String {
    let mut line = String::with_capacity(width as usize + 2);
    line.push(CORNER);
    line.extend(std::iter::repeat_n(FILL, width as usize));
    line.push(CORNER);
    line
}

/// Render the whole field. The start marker wins when start and end coincide.
///
/// Lines are joined with `\n`; there is no newline after the bottom border.
pub fn draw_board(
    grid: &types::Grid,
    start: (u32, u32),
    end: Option<(u32, u32)>,
    title: Option<&str>,
) -> String {
    let width = grid.get_width();
    let height = grid.get_height();

    let mut out = top_border(width, title);
    out.push('\n');

    (0..height).for_each(|y| {
        out.push(SIDE);
        out.extend((0..width).map(|x| {
            if (x, y) == start {
                START_SYMBOL
            } else if Some((x, y)) == end {
                END_SYMBOL
            } else {
                symbol_for(grid.get_visits(x, y))
            }
        }));
        out.push(SIDE);
        out.push('\n');
    });

    out.push_str(&bottom_border(width));
    out
}
