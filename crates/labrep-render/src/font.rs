//! Font discovery and the loaded typeface.
//!
//! Each template probes an ordered list of font files and keeps the first one
//! that parses. What happens when none does is a per-template policy: the
//! single-column template refuses to start, the two-column template falls
//! back to the built-in cell font.

use std::fs;
use std::path::{Path, PathBuf};

use labrep_model::TemplateKind;
use swash::FontRef;
use tracing::{debug, info, warn};

use crate::error::{RenderError, Result};

const SINGLE_COLUMN_FONTS: &[&str] = &[
    r"C:\Windows\Fonts\msyh.ttc",
    r"C:\Windows\Fonts\simhei.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];

const TWO_COLUMN_FONTS: &[&str] = &[
    "C:/Windows/Fonts/simsun.ttc",
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simhei.ttf",
];

/// CJK-capable fonts commonly installed on Linux and macOS.
const PLATFORM_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
];

/// What to do when no candidate font can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontPolicy {
    /// Fail with [`RenderError::NoFontAvailable`].
    Required,
    /// Continue with [`Typeface::Builtin`].
    FallbackToBuiltin,
}

/// Ordered font candidates plus the policy applied when all of them fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontProfile {
    pub candidates: Vec<PathBuf>,
    pub policy: FontPolicy,
}

impl FontProfile {
    /// The stock profile for a template.
    pub fn for_template(kind: TemplateKind) -> Self {
        let (own, policy) = match kind {
            TemplateKind::SingleColumn => (SINGLE_COLUMN_FONTS, FontPolicy::Required),
            TemplateKind::TwoColumn => (TWO_COLUMN_FONTS, FontPolicy::FallbackToBuiltin),
        };
        Self {
            candidates: own
                .iter()
                .chain(PLATFORM_FONTS)
                .map(|path| PathBuf::from(*path))
                .collect(),
            policy,
        }
    }

    /// Probe these paths before the stock candidates.
    #[must_use]
    pub fn with_preferred(mut self, paths: &[PathBuf]) -> Self {
        let mut candidates = paths.to_vec();
        candidates.append(&mut self.candidates);
        self.candidates = candidates;
        self
    }

    /// Load the first usable candidate, applying the policy if none is.
    pub fn load(&self) -> Result<Typeface> {
        for path in &self.candidates {
            if let Some(font) = OutlineFont::open(path) {
                info!(font = %path.display(), "using font");
                return Ok(Typeface::Outline(font));
            }
        }
        match self.policy {
            FontPolicy::Required => Err(RenderError::NoFontAvailable {
                candidates: self.candidates.clone(),
            }),
            FontPolicy::FallbackToBuiltin => {
                warn!(
                    tried = self.candidates.len(),
                    "no usable font found, falling back to built-in font"
                );
                Ok(Typeface::Builtin)
            }
        }
    }
}

/// A parsed font file kept in memory for the life of the process.
#[derive(Debug, Clone)]
pub struct OutlineFont {
    path: PathBuf,
    data: Vec<u8>,
}

impl OutlineFont {
    fn open(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(error) => {
                debug!(font = %path.display(), %error, "cannot read font");
                return None;
            }
        };
        if FontRef::from_index(&data, 0).is_none() {
            debug!(font = %path.display(), "not a parseable font");
            return None;
        }
        Some(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// First face of the file (collections use their first face too).
    pub fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, 0)
    }
}

/// The face all report text is drawn with.
#[derive(Debug, Clone)]
pub enum Typeface {
    Outline(OutlineFont),
    /// Fixed-cell fallback: ASCII from a 5×7 bitmap, everything else as an
    /// outlined box.
    Builtin,
}

impl Typeface {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }

    /// File the outline font was read from; `None` for the built-in font.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Typeface::Outline(font) => Some(font.path()),
            Typeface::Builtin => None,
        }
    }
}
