use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::BishopError;
use crate::{draw, utils};

pub const DEFAULT_WIDTH: u32 = 17;
pub const DEFAULT_HEIGHT: u32 = 9;
/// Narrowest field that can still frame a border.
pub const MIN_WIDTH: u32 = 3;
pub const MIN_HEIGHT: u32 = 1;

/// The config file format
#[derive(facet::Facet, Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of columns in the field
    #[facet(default = 17)]
    width: u32,
    /// Number of rows in the field
    #[facet(default = 9)]
    height: u32,
    /// Text shown in the top border
    #[facet(default)]
    title: Option<String>,
    /// How input strings become bytes: "md5", "hex" or "raw"
    #[facet(default)]
    mode: Option<String>,
}

/// Needs to be manually implemented because facets default only happens when
/// deserializing, not for the Default impl.
impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: None,
            mode: None,
        }
    }
}

impl Config {
    /// `<config dir>/drunken_bishop/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("drunken_bishop")
            .join("config.toml")
    }

    /// Read a config file, falling back to defaults if it is missing or broken.
    pub fn load_from(path: &Path) -> Config {
        let res = std::fs::read_to_string(path);
        if let Ok(file) = res
            && let Ok(cfg) = facet_toml::from_str(&file)
        {
            tracing::debug!(path = %path.display(), "loaded config");
            cfg
        } else {
            tracing::info!(path = %path.display(), "no usable config file, using defaults");
            Config::default()
        }
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = Some(mode.as_str().to_string());
    }

    /// The configured input mode, md5 when unset.
    pub fn input_mode(&self) -> Result<InputMode, BishopError> {
        self.mode
            .as_deref()
            .map_or(Ok(InputMode::default()), InputMode::from_str)
    }
}

/// How an input string is turned into the bytes that drive the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The UTF-8 bytes of the string itself
    Raw,
    /// The 16-byte MD5 digest of the string's UTF-8 bytes
    #[default]
    Md5,
    /// The string parsed as hex
    Hex,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Raw => "raw",
            InputMode::Md5 => "md5",
            InputMode::Hex => "hex",
        }
    }
}

impl FromStr for InputMode {
    type Err = BishopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(InputMode::Raw),
            "md5" => Ok(InputMode::Md5),
            "hex" => Ok(InputMode::Hex),
            other => Err(BishopError::InvalidEncoding(format!(
                "unknown input mode {other:?}"
            ))),
        }
    }
}

/// Represents the grid of cells with visit counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    visits: Vec<u32>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Grid {
            width,
            height,
            visits: vec![0; size],
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.visits.resize(size, 0);
        self.width = width;
        self.height = height;
        self.clear();
    }

    pub fn clear(&mut self) {
        self.visits.fill(0);
    }

    pub fn visit(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.visits[idx] = self.visits[idx].saturating_add(1);
        }
    }

    pub fn get_visits(&self, x: u32, y: u32) -> u32 {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.visits[idx]
        } else {
            0
        }
    }

    pub fn total_visits(&self) -> u64 {
        self.visits.iter().map(|&v| v as u64).sum()
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }
}

/// The field the bishop walks over.
///
/// Walks accumulate: every call to [`Board::walk`] or [`Board::make_art`]
/// adds onto the counts already on the grid until [`Board::clear`] is called.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    title: Option<String>,
    start: (u32, u32),
    end: Option<(u32, u32)>,
    last_input: Option<Vec<u8>>,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            grid: Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            title: None,
            start: (DEFAULT_WIDTH / 2, DEFAULT_HEIGHT / 2),
            end: None,
            last_input: None,
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), BishopError> {
    // the cell count has to fit in a u32
    if width < MIN_WIDTH || height < MIN_HEIGHT || width.checked_mul(height).is_none() {
        return Err(BishopError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl Board {
    pub fn new(width: u32, height: u32, title: Option<&str>) -> Result<Self, BishopError> {
        check_dimensions(width, height)?;
        Ok(Board {
            grid: Grid::new(width, height),
            title: title.map(str::to_string),
            start: (width / 2, height / 2),
            end: None,
            last_input: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, BishopError> {
        Board::new(config.get_width(), config.get_height(), config.get_title())
    }

    /// Zero every cell. Dimensions, start and title stay; the end marker goes.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.end = None;
        self.last_input = None;
    }

    /// Reallocate the grid at a new size. Leaves the board untouched on error.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), BishopError> {
        check_dimensions(width, height)?;
        self.grid.resize(width, height);
        self.start = (width / 2, height / 2);
        self.end = None;
        self.last_input = None;
        tracing::debug!(width, height, "board resized");
        Ok(())
    }

    /// Walk the bishop over `bytes`, four steps per byte, and return where it stopped.
    pub fn walk(&mut self, bytes: &[u8]) -> (u32, u32) {
        let width = self.grid.get_width();
        let height = self.grid.get_height();
        let mut bishop = self.start;

        for dir in bytes.iter().flat_map(|&b| utils::step_directions(b)) {
            bishop = utils::bishop_step(bishop, dir, width, height);
            self.grid.visit(bishop.0, bishop.1);
        }

        self.end = Some(bishop);
        tracing::debug!(bytes = bytes.len(), end = ?bishop, "walk finished");
        bishop
    }

    /// Preprocess `input`, walk it and render the result.
    pub fn make_art(&mut self, input: &str, mode: InputMode) -> Result<String, BishopError> {
        let bytes = utils::decode_input(input, mode)?;
        self.walk(&bytes);
        self.last_input = Some(bytes);
        Ok(self.render())
    }

    pub fn render(&self) -> String {
        draw::draw_board(&self.grid, self.start, self.end, self.title.as_deref())
    }

    pub fn width(&self) -> u32 {
        self.grid.get_width()
    }

    pub fn height(&self) -> u32 {
        self.grid.get_height()
    }

    pub fn start(&self) -> (u32, u32) {
        self.start
    }

    /// Where the last walk stopped, `None` before any walk or after clear/resize.
    pub fn end(&self) -> Option<(u32, u32)> {
        self.end
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn visits(&self, x: u32, y: u32) -> u32 {
        self.grid.get_visits(x, y)
    }

    pub fn total_visits(&self) -> u64 {
        self.grid.total_visits()
    }

    pub fn get_grid(&self) -> &Grid {
        &self.grid
    }

    /// Bytes consumed by the last [`Board::make_art`] call.
    pub fn last_input(&self) -> Option<&[u8]> {
        self.last_input.as_deref()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
