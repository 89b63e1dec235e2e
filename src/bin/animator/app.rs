use macroquad::prelude::*;
use projectile_motion::core::kinematics::KinematicsError;
use projectile_motion::core::window::shared_axis_window;

use crate::constants::{
    AXIS, BACKGROUND, BOTTOM_MARGIN, GRID, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TIMESTEP_S, TOP_MARGIN, UI_FONT_PATH,
};
use crate::model::{Playback, Scenario};
use crate::render::{
    draw_axis_tick_labels, draw_grid, draw_hud, draw_path, world_to_screen,
};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn build_playbacks() -> Result<Vec<Playback>, KinematicsError> {
    Scenario::side_by_side()
        .into_iter()
        .map(|scenario| Playback::new(scenario, TIMESTEP_S))
        .collect()
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("could not load '{UI_FONT_PATH}': {err}; falling back to default font");
            None
        }
    };

    let mut playbacks = match build_playbacks() {
        Ok(playbacks) => playbacks,
        Err(err) => {
            log::error!("simulation setup failed: {err}");
            return;
        }
    };

    // One display scale for the whole session, from the engines' derived
    // extents; the engines themselves stay pixel-free.
    let (world_max_x, world_max_y) = shared_axis_window(
        playbacks
            .iter()
            .map(|p| (p.engine.range().max(0.0), p.engine.hmax())),
    );

    let mut paused = false;
    let mut accumulator = 0.0f64;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::R) {
            for playback in &mut playbacks {
                playback.restart();
            }
            accumulator = 0.0;
        }

        if !paused {
            accumulator += get_frame_time() as f64;
            while accumulator >= TIMESTEP_S {
                accumulator -= TIMESTEP_S;
                for playback in &mut playbacks {
                    // None once exhausted; the dot just stays on its last sample.
                    let _ = playback.advance();
                }
            }
        }

        let left = LEFT_MARGIN;
        let right = screen_width() - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_height() - BOTTOM_MARGIN;

        clear_background(BACKGROUND);
        draw_grid(left, right, top, bottom, GRID);
        draw_line(left, bottom, right, bottom, 2.0, AXIS);
        draw_line(left, top, left, bottom, 2.0, AXIS);
        draw_axis_tick_labels(
            left,
            right,
            top,
            bottom,
            world_max_x,
            world_max_y,
            ui_font.as_ref(),
        );

        for playback in &playbacks {
            draw_path(
                playback.visited(),
                world_max_x,
                world_max_y,
                left,
                right,
                top,
                bottom,
                2.0,
                playback.scenario.trace_color,
            );
            if let Some(position) = playback.current() {
                let p = world_to_screen(
                    position,
                    world_max_x,
                    world_max_y,
                    left,
                    right,
                    top,
                    bottom,
                );
                draw_circle(p.x, p.y, 6.0, playback.scenario.trace_color);
            }
        }

        draw_hud(&playbacks, paused, left, screen_height(), ui_font.as_ref());

        next_frame().await;
    }
}
