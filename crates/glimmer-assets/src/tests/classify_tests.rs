use super::*;

use crate::ResourceHandle;

fn link(uri: &str) -> AssetValue {
    AssetValue::Uri(uri.to_string())
}

#[test]
fn svg_suffix_is_case_insensitive() {
    assert_eq!(
        classify(&link("https://x.io/a/b.SVG"), AssetKind::Link, Platform::Android),
        RenderKind::Vector
    );
}

#[test]
fn query_and_fragment_are_not_part_of_the_path() {
    assert_eq!(
        classify(&link("https://x.io/a/b.svg?x=1"), AssetKind::Link, Platform::Ios),
        RenderKind::Vector
    );
    assert_eq!(
        classify(&link("https://x.io/a/b.svg#icon"), AssetKind::Link, Platform::Desktop),
        RenderKind::Vector
    );
    assert_eq!(
        classify(&link("https://x.io/a/b.png?type=.svg"), AssetKind::Link, Platform::Ios),
        RenderKind::Raster
    );
}

#[test]
fn unparseable_uri_is_raster() {
    assert_eq!(
        classify(&link("not a url"), AssetKind::Link, Platform::Android),
        RenderKind::Raster
    );
    assert_eq!(
        classify(&link("/relative/icon.svg"), AssetKind::Link, Platform::Android),
        RenderKind::Raster
    );
}

#[test]
fn web_never_uses_the_vector_renderer() {
    assert_eq!(
        classify(&link("https://x.io/logo.svg"), AssetKind::Link, Platform::Web),
        RenderKind::Raster
    );
}

#[test]
fn local_assets_are_raster() {
    assert_eq!(
        classify(&link("https://x.io/logo.svg"), AssetKind::Local, Platform::Android),
        RenderKind::Raster
    );
    assert_eq!(
        classify(
            &AssetValue::Resource(ResourceHandle::new(3)),
            AssetKind::Link,
            Platform::Android
        ),
        RenderKind::Raster
    );
}
