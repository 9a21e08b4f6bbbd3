use mandelbrot_explorer::{
    ExplorerConfig, InputEvent, InteractiveController, LatestFramePresenter, Point,
};

/// Wheel ticks per zoom step in the scripted session.
const ZOOM_TICKS: usize = 12;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExplorerConfig::from_env()?;
    let mut controller = InteractiveController::new(&config, LatestFramePresenter::new())?;
    let grid = controller.grid();
    let edge = grid.edge() as i32;

    controller.force_render();

    // Seahorse valley, about -0.75 + 0.1i on the default view.
    let cursor = Point::new(edge * 5 / 16, edge * 21 / 40);
    for _ in 0..ZOOM_TICKS {
        controller.handle(InputEvent::Wheel {
            cursor,
            delta_y: -1.0,
        })?;
    }

    controller.handle(InputEvent::Drag {
        delta: Point::new(edge / 10, -edge / 20),
    })?;

    if let Some(&deepest) = controller.budget_options().values().last() {
        controller.handle(InputEvent::SelectBudget(deepest))?;
    }

    // Coalesced burst: only one frame for the final state.
    controller.handle_batch((0..ZOOM_TICKS).map(|_| InputEvent::Wheel {
        cursor: grid.centre(),
        delta_y: 1.0,
    }))?;

    controller.handle(InputEvent::Reset)?;

    let centre = controller.viewport().center();
    log::info!(
        "Session done: {} frames, final view centre {}{:+}i scale {}, average render {:?}",
        controller.sink().frames_presented(),
        centre.real,
        centre.imag,
        controller.viewport().scale(),
        controller.sink().average_render_time().unwrap_or_default()
    );

    Ok(())
}
