use glimmer_core::Platform;
use url::Url;

use crate::descriptor::{AssetKind, AssetValue};

/// Which host renderer should decode an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderKind {
    Raster,
    /// Vector markup that needs the dedicated vector renderer.
    Vector,
}

/// Decides whether `value` must go through the vector renderer.
///
/// Only linked URIs whose path ends in `.svg` qualify, and never on the web
/// where the host image element renders vector markup itself. A URI that
/// fails to parse is treated as raster.
pub fn classify(value: &AssetValue, declared: AssetKind, platform: Platform) -> RenderKind {
    if declared != AssetKind::Link || platform.renders_vector_natively() {
        return RenderKind::Raster;
    }
    let Some(uri) = value.as_uri() else {
        return RenderKind::Raster;
    };
    match Url::parse(uri) {
        Ok(parsed) if parsed.path().to_ascii_lowercase().ends_with(".svg") => RenderKind::Vector,
        Ok(_) => RenderKind::Raster,
        Err(err) => {
            log::trace!("treating {uri:?} as raster: {err}");
            RenderKind::Raster
        }
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
