use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{CracktroError, CracktroResult};

/// Decoded raster ready to be used as a paint.
#[derive(Clone)]
pub(crate) struct PreparedImage {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) paint: vello_cpu::Image,
}

pub(crate) fn decode_image(bytes: &[u8]) -> CracktroResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    let pixmap = pixmap_from_premul_bytes(&rgba8_premul, width, height)?;
    Ok(PreparedImage {
        width,
        height,
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
    })
}

pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> CracktroResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CracktroError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CracktroError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CracktroError::render("pixmap byte len mismatch"));
    }
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn normalize_rel_path(source: &str) -> CracktroResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CracktroError::validation("image paths must be relative"));
    }
    if s.is_empty() {
        return Err(CracktroError::validation("image path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CracktroError::validation("image paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CracktroError::validation(
            "image path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Sprite sources keyed by the URL stored on the effect.
///
/// Failed loads are remembered so a broken URL is reported once and then rendered as a
/// placeholder without touching the filesystem again.
#[derive(Default)]
pub(crate) struct ImageCache {
    root: Option<PathBuf>,
    entries: HashMap<String, Option<Arc<PreparedImage>>>,
}

impl ImageCache {
    pub(crate) fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            entries: HashMap::new(),
        }
    }

    pub(crate) fn get(&mut self, url: &str) -> Option<Arc<PreparedImage>> {
        if url.trim().is_empty() {
            return None;
        }
        if let Some(hit) = self.entries.get(url) {
            return hit.clone();
        }
        let loaded = match self.load(url) {
            Ok(img) => Some(Arc::new(img)),
            Err(err) => {
                tracing::warn!(url, error = %err, "sprite image unavailable, using placeholder");
                None
            }
        };
        self.entries.insert(url.to_owned(), loaded.clone());
        loaded
    }

    fn resolve(&self, url: &str) -> CracktroResult<PathBuf> {
        if let Some(abs) = url.strip_prefix("file://") {
            return Ok(PathBuf::from(abs));
        }
        if url.contains("://") || url.starts_with("data:") || url.starts_with("blob:") {
            return Err(CracktroError::validation(format!(
                "unsupported image source '{url}'"
            )));
        }
        let rel = normalize_rel_path(url)?;
        let root = self.root.as_deref().unwrap_or_else(|| Path::new("."));
        Ok(root.join(rel))
    }

    fn load(&self, url: &str) -> CracktroResult<PreparedImage> {
        let path = self.resolve(url)?;
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read image '{}'", path.display()))?;
        decode_image(&bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
