//! Renderers consuming [`Scene`] snapshots
//!
//! - `YamlRenderer` writes one YAML document per frame to any writer
//! - `LogRenderer` reports a one-line summary per frame through `tracing`

use std::io::Write;

use tracing::info;

use crate::error::Result;

use super::scene::Scene;

pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> Result<()>;
}

pub struct YamlRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> YamlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for YamlRenderer<W> {
    fn render(&mut self, scene: &Scene) -> Result<()> {
        writeln!(self.out, "---")?;
        serde_yaml::to_writer(&mut self.out, scene)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: usize,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, scene: &Scene) -> Result<()> {
        let labels: Vec<&str> = scene.labels.iter().map(|l| l.text.as_str()).collect();
        info!(
            frame = self.frames,
            title = %scene.title,
            markers = scene.markers.len(),
            arrows = scene.arrows.len(),
            labels = ?labels,
            "frame"
        );
        self.frames += 1;
        Ok(())
    }
}
