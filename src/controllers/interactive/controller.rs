use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::ControllerError;
use crate::controllers::interactive::events::input_event::InputEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::render_frame::RenderStrategy;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_budget::{BudgetOptions, IterationBudget};
use crate::core::data::viewport::{Viewport, ZoomDirection};
use log::{debug, info, warn};
use std::time::Instant;

/// Owns the session state and turns input events into rendered frames.
///
/// Everything runs on the caller's thread: a render always completes before
/// the next event is applied. Bursts of input can be coalesced with
/// [`handle_batch`](Self::handle_batch), which applies every event and then
/// renders only the final state.
pub struct InteractiveController<S: FrameSink> {
    viewport: Viewport,
    budget: IterationBudget,
    budget_options: BudgetOptions,
    grid: GridSize,
    strategy: RenderStrategy,
    sink: S,
    last_rendered: Option<RenderRequest>,
    generation: u64,
}

impl<S: FrameSink> InteractiveController<S> {
    pub fn new(config: &ExplorerConfig, sink: S) -> Result<Self, ConfigError> {
        let config = config.validate()?;

        info!(
            "Starting session: {}x{} grid, budget {} of {:?}, {} rendering",
            config.grid.edge(),
            config.grid.edge(),
            config.initial_budget.get(),
            config.budget_options.values(),
            config.render_strategy.display_name()
        );

        Ok(Self {
            viewport: Viewport::default(),
            budget: config.initial_budget,
            budget_options: config.budget_options,
            grid: config.grid,
            strategy: config.render_strategy,
            sink,
            last_rendered: None,
            generation: 0,
        })
    }

    /// Applies one event without rendering.
    ///
    /// A rejected event leaves the session state untouched.
    pub fn apply(&mut self, event: InputEvent) -> Result<(), ControllerError> {
        match event {
            InputEvent::Wheel { cursor, delta_y } => {
                if !delta_y.is_finite() {
                    warn!("Ignoring wheel event with non-finite delta {}", delta_y);
                    return Err(ControllerError::NonFiniteWheelDelta);
                }

                if let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) {
                    self.viewport.zoom(cursor, direction, self.grid);
                }
            }
            InputEvent::Drag { delta } => {
                self.viewport.pan(delta, self.grid);
            }
            InputEvent::Reset => {
                self.viewport.reset();
            }
            InputEvent::SelectBudget(requested) => {
                let budget = self.budget_options.select(requested).map_err(|err| {
                    warn!("Rejected budget selection: {}", err);
                    ControllerError::from(err)
                })?;

                if budget != self.budget {
                    info!("Iteration budget {} -> {}", self.budget.get(), budget.get());
                }
                self.budget = budget;
            }
        }

        Ok(())
    }

    /// Applies `event` and renders the resulting state if it changed.
    ///
    /// Returns the generation of the frame handed to the sink, if any.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<u64>, ControllerError> {
        self.apply(event)?;

        Ok(self.render_if_needed())
    }

    /// Applies every event in order, then renders once.
    ///
    /// Stops at the first rejected event; the state changed by earlier events
    /// is kept but nothing is rendered.
    pub fn handle_batch<I>(&mut self, events: I) -> Result<Option<u64>, ControllerError>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event)?;
        }

        Ok(self.render_if_needed())
    }

    #[must_use]
    pub fn current_request(&self) -> RenderRequest {
        RenderRequest {
            viewport: self.viewport,
            budget: self.budget,
            grid: self.grid,
        }
    }

    /// Renders unless the last presented frame already shows the current state.
    pub fn render_if_needed(&mut self) -> Option<u64> {
        let request = self.current_request();

        if self.last_rendered == Some(request) {
            debug!("Skipping render; state unchanged since generation {}", self.generation);
            return None;
        }

        Some(self.render(request))
    }

    /// Renders the current state unconditionally.
    pub fn force_render(&mut self) -> u64 {
        let request = self.current_request();

        self.render(request)
    }

    fn render(&mut self, request: RenderRequest) -> u64 {
        let start = Instant::now();
        let pixel_buffer = request.render(self.strategy);
        let render_duration = start.elapsed();

        self.generation += 1;
        self.last_rendered = Some(request);

        let centre = request.viewport.center();
        debug!(
            "Rendered generation {} in {:?} (centre {:.6}{:+.6}i, scale {:e}, budget {})",
            self.generation,
            render_duration,
            centre.real,
            centre.imag,
            request.viewport.scale(),
            request.budget.get()
        );

        self.sink.present(FrameData {
            generation: self.generation,
            pixel_buffer,
            render_duration,
        });

        self.generation
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    #[must_use]
    pub fn budget_options(&self) -> &BudgetOptions {
        &self.budget_options
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
