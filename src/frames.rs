/// Multi-line text frames loaded from disk.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    text: String,
    rows: u16,
    columns: u16,
}

impl Frame {
    /// Fails when the text does not fit a terminal-sized bounding box.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let (rows, columns) = frame_size(&text)?;
        Ok(Frame { text, rows, columns })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read frame {}", path.display()))?;
        Frame::new(text).with_context(|| format!("Bad frame {}", path.display()))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bounding box as `(rows, columns)`.
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }
}

/// Row count and widest line, in characters.
pub fn frame_size(text: &str) -> Result<(u16, u16)> {
    let rows = text.lines().count();
    let columns = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    let rows = u16::try_from(rows).with_context(|| format!("Frame has {rows} rows"))?;
    let columns = u16::try_from(columns).with_context(|| format!("Frame has {columns} columns"))?;
    Ok((rows, columns))
}

/// Every regular file in `dir`, ordered by file name.
pub fn load_dir(dir: &Path) -> Result<Vec<Frame>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list frames in {}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    if paths.is_empty() {
        bail!("No frames found in {}", dir.display());
    }
    paths.iter().map(|p| Frame::load(p)).collect()
}

/// All frames a session needs, read once before the game starts.
#[derive(Clone, Debug)]
pub struct Assets {
    pub rocket: Vec<Rc<Frame>>,
    pub garbage: Vec<Rc<Frame>>,
    pub explosion: Vec<Rc<Frame>>,
    pub game_over: Rc<Frame>,
}

impl Assets {
    pub fn load(dir: &Path) -> Result<Self> {
        let rocket = vec![
            Rc::new(Frame::load(&dir.join("rocket_frame_1.txt"))?),
            Rc::new(Frame::load(&dir.join("rocket_frame_2.txt"))?),
        ];
        let garbage: Vec<_> = load_dir(&dir.join("trash"))?.into_iter().map(Rc::new).collect();
        let explosion: Vec<_> = load_dir(&dir.join("explosion"))?.into_iter().map(Rc::new).collect();
        let game_over = Rc::new(Frame::load(&dir.join("game_over_frame.txt"))?);

        debug!(
            dir = %dir.display(),
            garbage = garbage.len(),
            explosion = explosion.len(),
            "assets loaded"
        );
        Ok(Assets { rocket, garbage, explosion, game_over })
    }
}
