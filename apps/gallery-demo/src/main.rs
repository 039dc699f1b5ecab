//! Mounts a small gallery against a fake network host and steps frames
//! until every tile has either faded in or fallen back.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Context;
use glimmer_assets::{AssetKind, ResourceHandle};
use glimmer_core::{LoadSender, Runtime};
use glimmer_graphics::{Color, Size};
use glimmer_ui::{
    DancingText, DancingTextConfig, ImageContext, ImageHost, ImageStyle, ImageView,
    ImageViewConfig, LoadRequest, LoadState, PlaceholderStyle, VisualNode,
};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const TIMEOUT: Duration = Duration::from_secs(5);

struct InFlight {
    ready_at: Instant,
    fails: bool,
    signal: LoadSender,
}

/// Pretends to fetch over the network: every request resolves after a fixed
/// per-request latency. Links containing `missing` fail.
#[derive(Default)]
struct SimulatedHost {
    in_flight: Vec<InFlight>,
    issued: u32,
}

impl SimulatedHost {
    fn poll(&mut self, now: Instant) {
        let (ready, pending): (Vec<_>, Vec<_>) = self
            .in_flight
            .drain(..)
            .partition(|load| load.ready_at <= now);
        self.in_flight = pending;
        for load in ready {
            if load.fails {
                load.signal.fail("404 Not Found");
            } else {
                load.signal.succeed();
            }
        }
    }

    fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }
}

impl ImageHost for SimulatedHost {
    fn request(&mut self, request: LoadRequest, signal: LoadSender) {
        let fails = match &request {
            LoadRequest::Raster { source, .. } => source
                .value
                .as_uri()
                .is_some_and(|uri| uri.contains("missing")),
            LoadRequest::Vector { uri, .. } => uri.contains("missing"),
        };
        let latency = Duration::from_millis(120 + 90 * u64::from(self.issued % 5));
        self.issued += 1;
        log::info!("requesting {request:?} ({}ms)", latency.as_millis());
        self.in_flight.push(InFlight {
            ready_at: Instant::now() + latency,
            fails,
            signal,
        });
    }
}

fn gallery(loaded: &Rc<Cell<u32>>) -> anyhow::Result<Vec<(String, ImageViewConfig)>> {
    let style = ImageStyle::new().size(240.0, 160.0).corner_radius(12.0);
    let counter = |name: &'static str| {
        let loaded = Rc::clone(loaded);
        move |ok: bool| {
            loaded.set(loaded.get() + 1);
            log::info!("{name} revealed (loaded = {ok})");
        }
    };

    let tiles = vec![
        (
            "shimmer photo",
            ImageViewConfig::builder()
                .link("https://picsum.photos/id/10/480/320.jpg")
                .style(style)
                .on_image_loaded(counter("shimmer photo"))
                .build(),
        ),
        (
            "solid photo",
            ImageViewConfig::builder()
                .link("https://picsum.photos/id/20/480/320.jpg")
                .style(style)
                .placeholder(PlaceholderStyle::Solid)
                .placeholder_color(Color::from_hex("#cfd8dc").context("placeholder color")?)
                .transition_duration_ms(450)
                .on_image_loaded(counter("solid photo"))
                .build(),
        ),
        (
            "spinner logo",
            ImageViewConfig::builder()
                .link("https://cdn.example.com/brand/logo.svg")
                .style(ImageStyle::new().size(96.0, 96.0))
                .placeholder(PlaceholderStyle::Icon)
                .on_image_loaded(counter("spinner logo"))
                .build(),
        ),
        (
            "bundled banner",
            ImageViewConfig::builder()
                .kind(AssetKind::Local)
                .source(ResourceHandle::in_bundle(7, "main"))
                .style(style)
                .on_image_loaded(counter("bundled banner"))
                .build(),
        ),
        (
            "broken link",
            ImageViewConfig::builder()
                .link("https://picsum.photos/missing.jpg")
                .style(style)
                .build(),
        ),
    ];

    tiles
        .into_iter()
        .map(|(name, config)| {
            config
                .map(|config| (name.to_string(), config))
                .with_context(|| format!("invalid config for {name}"))
        })
        .collect()
}

fn describe(node: &VisualNode) -> &'static str {
    if node.find(&|n| matches!(n, VisualNode::ShimmerBar { .. })).is_some() {
        "shimmer"
    } else if node.find(&|n| matches!(n, VisualNode::Spinner { .. })).is_some() {
        "spinner"
    } else if matches!(node, VisualNode::Fill { .. }) {
        "fallback"
    } else {
        "image"
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let runtime = Runtime::default();
    let handle = runtime.handle();
    let context = ImageContext::new(runtime.handle());
    let banner = DancingText::new(
        DancingTextConfig::new().letters("Loading").animated(true),
        runtime.handle(),
        context.platform(),
    );
    banner.mount();
    let mut host = SimulatedHost::default();
    let loaded = Rc::new(Cell::new(0));

    let views: Vec<(String, ImageView)> = gallery(&loaded)?
        .into_iter()
        .map(|(name, config)| {
            let view = ImageView::new(config, context.clone());
            view.mount(&mut host);
            view.on_layout(Size::new(240.0, 160.0));
            (name, view)
        })
        .collect();

    let started = Instant::now();
    let mut frames = 0u64;
    loop {
        let now = Instant::now();
        host.poll(now);
        handle.drain_ui();
        let frame_nanos = u64::try_from(now.duration_since(started).as_nanos())
            .context("frame time overflow")?;
        handle.drain_frame_callbacks(frame_nanos);
        frames += 1;

        if frames % 10 == 0 {
            let offsets: Vec<f32> = (0..banner.letters().len())
                .map(|index| banner.letter_offset(index))
                .collect();
            log::trace!("banner offsets {offsets:?}");
            for (name, view) in &views {
                log::debug!("{name}: {:?} showing {}", view.load_state(), describe(&view.render()));
            }
        }

        if host.is_idle() && banner.is_animating() {
            banner.unmount();
        }
        if host.is_idle() && !runtime.needs_frame() {
            break;
        }
        if now.duration_since(started) > TIMEOUT {
            anyhow::bail!("gallery still busy after {:?}", TIMEOUT);
        }
        std::thread::sleep(FRAME);
    }

    for (name, view) in &views {
        let state = view.load_state();
        match state {
            LoadState::Errored => log::warn!(
                "{name}: fell back ({})",
                view.error().unwrap_or_default()
            ),
            _ => log::info!("{name}: {state:?}, showing {}", describe(&view.render())),
        }
        view.unmount();
    }
    log::info!(
        "{} of {} tiles revealed in {frames} frames",
        loaded.get(),
        views.len()
    );
    Ok(())
}
