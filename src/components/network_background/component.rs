use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, ResizeObserver, Window};

use super::engine::NetworkEngine;
use super::scheduler::FrameHost;
use super::state::NetworkState;
use super::types::{DEFAULT_NODE_COUNT, DEFAULT_OPACITY, NetworkOptions, SetupError};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type SharedEngine = Rc<RefCell<NetworkEngine<AnimationFrames, CanvasRenderingContext2d>>>;

/// `requestAnimationFrame` re-invoking one shared callback.
struct AnimationFrames {
	window: Window,
	callback: FrameCallback,
}

impl FrameHost for AnimationFrames {
	type Handle = i32;

	fn request_frame(&self) -> Option<i32> {
		let callback = self.callback.borrow();
		let callback = callback.as_ref()?;
		self.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

/// Everything registered with the browser for one mounted canvas.
struct Mounted {
	engine: SharedEngine,
	frame_callback: FrameCallback,
	observer: ResizeObserver,
	_on_resize: Closure<dyn FnMut()>,
	visibility: Option<(Document, Closure<dyn FnMut()>)>,
}

impl Mounted {
	fn release(self) {
		self.engine.borrow_mut().stop();
		self.observer.disconnect();
		if let Some((document, listener)) = &self.visibility {
			let _ = document.remove_event_listener_with_callback(
				"visibilitychange",
				listener.as_ref().unchecked_ref(),
			);
		}
		// The frame closure holds the engine; dropping it breaks the cycle.
		self.frame_callback.borrow_mut().take();
	}
}

/// Sizes the canvas to its container and returns the new surface size.
fn fit_to(canvas: &HtmlCanvasElement, container: &Element) -> (f64, f64) {
	let rect = container.get_bounding_client_rect();
	canvas.set_width(rect.width().max(0.0) as u32);
	canvas.set_height(rect.height().max(0.0) as u32);
	(canvas.width() as f64, canvas.height() as f64)
}

fn mount(canvas: HtmlCanvasElement, options: &NetworkOptions) -> Result<Mounted, SetupError> {
	let window = web_sys::window().ok_or(SetupError::NoWindow)?;
	let container = canvas.parent_element().ok_or(SetupError::NoContainer)?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(SetupError::NoContext)?
		.dyn_into()
		.map_err(|_| SetupError::NoContext)?;

	let (width, height) = fit_to(&canvas, &container);
	let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
	let state = NetworkState::new(options.node_count, width, height, seed);

	let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
	let host = AnimationFrames {
		window: window.clone(),
		callback: frame_callback.clone(),
	};
	let engine: SharedEngine = Rc::new(RefCell::new(NetworkEngine::new(
		state,
		host,
		ctx,
		options.pause_when_hidden,
	)));

	let (engine_resize, container_resize) = (engine.clone(), container.clone());
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let (width, height) = fit_to(&canvas, &container_resize);
		engine_resize.borrow_mut().on_resize(width, height);
	});
	let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;

	let visibility = if options.pause_when_hidden {
		let document = window.document().ok_or(SetupError::NoWindow)?;
		let (engine_visibility, document_visibility) = (engine.clone(), document.clone());
		let listener = Closure::<dyn FnMut()>::new(move || {
			engine_visibility
				.borrow_mut()
				.set_visible(!document_visibility.hidden());
		});
		document.add_event_listener_with_callback(
			"visibilitychange",
			listener.as_ref().unchecked_ref(),
		)?;
		Some((document, listener))
	} else {
		None
	};

	observer.observe(&container);

	let engine_frame = engine.clone();
	*frame_callback.borrow_mut() = Some(Closure::new(move |now: f64| {
		engine_frame.borrow_mut().on_frame(now);
	}));
	engine.borrow_mut().start();

	Ok(Mounted {
		engine,
		frame_callback,
		observer,
		_on_resize: on_resize,
		visibility,
	})
}

/// Decorative animated network drawn behind the content of its parent.
///
/// The parent must be positioned; the canvas fills it and ignores pointer
/// events. If the canvas cannot be set up the component renders an empty
/// canvas and logs why.
#[component]
pub fn NetworkBackground(
	/// Number of simulated nodes, at least 1.
	#[prop(default = DEFAULT_NODE_COUNT)]
	node_count: usize,
	/// Opacity of the whole canvas in `[0, 1]`.
	#[prop(default = DEFAULT_OPACITY)]
	opacity: f64,
	/// Pause the animation while the document is hidden.
	#[prop(default = false)]
	pause_when_hidden: bool,
	/// Extra classes for the canvas.
	#[prop(optional, into)]
	class: Option<String>,
) -> impl IntoView {
	let options = NetworkOptions {
		node_count,
		opacity,
		pause_when_hidden,
	}
	.sanitized();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<Mounted>);

	let style = format!(
		"position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; opacity: {};",
		options.opacity
	);
	let class = match class {
		Some(extra) => format!("network-background {}", extra),
		None => "network-background".to_string(),
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		mounted.update_value(|slot| {
			if let Some(previous) = slot.take() {
				previous.release();
			}
			match mount(canvas, &options) {
				Ok(next) => *slot = Some(next),
				Err(err) => debug!("network background stays idle: {}", err),
			}
		});
	});

	on_cleanup(move || {
		mounted.update_value(|slot| {
			if let Some(current) = slot.take() {
				current.release();
			}
		});
	});

	view! { <canvas node_ref=canvas_ref class=class style=style aria-hidden="true" /> }
}
