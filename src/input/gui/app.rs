use crate::config::ExplorerConfig;
use crate::controllers::interactive::{InputEvent, InteractiveController};
use crate::input::gui::translate::{key_to_event, PointerState};
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::{error, info, warn};
use std::error::Error;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::{Window, WindowBuilder};

struct GuiApp {
    controller: InteractiveController<PixelsPresenter>,
    pointer: PointerState,
    surface: (u32, u32),
    pending: Vec<InputEvent>,
}

impl GuiApp {
    fn handle_window_event(&mut self, event: &WindowEvent) {
        let grid = self.controller.grid();

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let drag = self
                    .pointer
                    .cursor_moved(position.x, position.y, self.surface, grid);

                if let Some(drag) = drag {
                    self.pending.push(drag);
                }
            }
            WindowEvent::CursorLeft { .. } => self.pointer.cursor_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.pointer.set_dragging(*state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let up_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };

                if let Some(wheel) = self.pointer.wheel(up_delta, grid) {
                    self.pending.push(wheel);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Character(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(event) = key_to_event(key.as_str(), self.controller.budget_options()) {
                    self.pending.push(event);
                }
            }
            WindowEvent::Resized(size) => {
                self.surface = (size.width, size.height);
                self.controller.sink_mut().resize(size.width, size.height);
            }
            _ => {}
        }
    }

    /// Applies everything queued since the last loop turn and renders once.
    fn flush(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }

        let events: Vec<InputEvent> = self.pending.drain(..).collect();

        match self.controller.handle_batch(events) {
            Ok(generation) => generation.is_some(),
            Err(err) => {
                warn!("Input rejected: {}", err);
                // earlier events in the batch may still have moved the view
                self.controller.render_if_needed().is_some()
            }
        }
    }
}

/// Opens an N×N window and runs the explorer until it is closed.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let validated = config.validate()?;
    let edge = validated.grid.edge();

    let event_loop = EventLoop::new()?;
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(PhysicalSize::new(edge, edge))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let presenter = PixelsPresenter::new(window, validated.grid)?;
    let mut controller = InteractiveController::new(config, presenter)?;
    controller.force_render();
    window.request_redraw();

    info!(
        "Scroll to zoom, drag to pan, R to reset, 1-{} to pick a budget",
        controller.budget_options().values().len()
    );

    let mut app = GuiApp {
        controller,
        pointer: PointerState::default(),
        surface: (size.width, size.height),
        pending: Vec::new(),
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.controller.sink().draw() {
                    error!("Render error: {}", err);
                    elwt.exit();
                }
            }
            other => app.handle_window_event(&other),
        },
        Event::AboutToWait => {
            if app.flush() {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
