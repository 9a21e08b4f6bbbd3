//! Whole-pipeline scenarios on the default 600×600 session.

use mandelbrot_explorer::{
    colour_for, escape_time, render_frame, Colour, ExplorerConfig, GridSize, InputEvent,
    InteractiveController, IterationBudget, LatestFramePresenter, Point, RenderStrategy, Viewport,
};

fn grid() -> GridSize {
    GridSize::new(600).unwrap()
}

fn budget() -> IterationBudget {
    IterationBudget::new(100).unwrap()
}

#[test]
fn centre_pixel_is_origin_and_bounded() {
    let c = Viewport::default().pixel_to_complex(Point::new(300, 300), grid());

    assert_eq!((c.real, c.imag), (0.0, 0.0));
    assert_eq!(escape_time(c.real, c.imag, 100), 100);
    assert_eq!(colour_for(100, 100), Colour { r: 255, g: 255, b: 255 });
}

#[test]
fn corner_pixel_escapes_immediately_and_is_black() {
    let c = Viewport::default().pixel_to_complex(Point::new(0, 0), grid());

    // rows grow with the imaginary part, so the top-left pixel is -2 - 2i
    assert!((c.real + 2.0).abs() < 1e-12);
    assert!((c.imag + 2.0).abs() < 1e-12);
    assert!(c.magnitude_squared() > 4.0);
    assert_eq!(escape_time(c.real, c.imag, 100), 0);
    assert_eq!(colour_for(0, 100), Colour { r: 0, g: 0, b: 0 });
}

#[test]
fn zoom_in_at_centre_shrinks_scale_only() {
    let mut controller =
        InteractiveController::new(&ExplorerConfig::default(), LatestFramePresenter::new())
            .unwrap();

    controller
        .handle(InputEvent::Wheel {
            cursor: Point::new(300, 300),
            delta_y: -1.0,
        })
        .unwrap();

    assert!((controller.viewport().scale() - 3.6).abs() < 1e-12);
    assert_eq!(controller.viewport().center().real, 0.0);
    assert_eq!(controller.viewport().center().imag, 0.0);
}

#[test]
fn rendered_frame_matches_per_pixel_pipeline() {
    let frame = render_frame(&Viewport::default(), budget(), grid(), RenderStrategy::Parallel);

    for pixel in [Point::new(300, 300), Point::new(0, 0), Point::new(150, 420), Point::new(599, 1)] {
        let c = Viewport::default().pixel_to_complex(pixel, grid());
        let colour = colour_for(escape_time(c.real, c.imag, 100), 100);
        let index = 4 * (pixel.y as usize * 600 + pixel.x as usize);

        assert_eq!(
            &frame.as_bytes()[index..index + 4],
            &[colour.r, colour.g, colour.b, 255]
        );
    }
}

#[test]
fn controller_session_presents_complete_frames() {
    let config = ExplorerConfig {
        grid_edge: 120,
        ..ExplorerConfig::default()
    };
    let mut controller = InteractiveController::new(&config, LatestFramePresenter::new()).unwrap();

    controller.force_render();
    controller
        .handle(InputEvent::Drag {
            delta: Point::new(-10, 4),
        })
        .unwrap();
    controller.handle(InputEvent::SelectBudget(300)).unwrap();

    let frame = controller.sink().latest().unwrap();
    let expected = render_frame(
        controller.viewport(),
        controller.budget(),
        controller.grid(),
        RenderStrategy::Serial,
    );

    assert_eq!(frame.generation, 3);
    assert_eq!(frame.pixel_buffer, expected);
    assert_eq!(controller.sink().frames_presented(), 3);
}

#[test]
fn failed_budget_selection_keeps_displayed_frame() {
    let config = ExplorerConfig {
        grid_edge: 40,
        ..ExplorerConfig::default()
    };
    let mut controller = InteractiveController::new(&config, LatestFramePresenter::new()).unwrap();
    controller.force_render();
    let before = controller.sink().latest_buffer().cloned();

    assert!(controller.handle(InputEvent::SelectBudget(0)).is_err());

    assert_eq!(controller.sink().latest_buffer().cloned(), before);
    assert_eq!(controller.last_generation(), 1);
}

#[test]
fn burst_of_events_is_coalesced_into_one_frame() {
    let config = ExplorerConfig {
        grid_edge: 64,
        ..ExplorerConfig::default()
    };
    let mut controller = InteractiveController::new(&config, LatestFramePresenter::new()).unwrap();

    let drags = (0..50).map(|_| InputEvent::Drag {
        delta: Point::new(1, 1),
    });
    let generation = controller.handle_batch(drags).unwrap();

    assert_eq!(generation, Some(1));
    assert_eq!(controller.sink().frames_presented(), 1);
}
