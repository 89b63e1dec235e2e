use macroquad::prelude::*;

use crate::constants::{AXIS, CONTROLS_Y, HUD_TEXT, TITLE_Y, X_GRID_LINES, Y_GRID_LINES};
use crate::model::Playback;

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn world_to_screen(
    world: (f64, f64),
    world_max_x: f64,
    world_max_y: f64,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) -> Vec2 {
    let plot_w = (right - left).max(1.0);
    let plot_h = (bottom - top).max(1.0);
    let x = left + ((world.0 / world_max_x.max(1.0)) as f32) * plot_w;
    let y = bottom - ((world.1 / world_max_y.max(1.0)) as f32) * plot_h;
    vec2(x, y)
}

pub(crate) fn draw_grid(left: f32, right: f32, top: f32, bottom: f32, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    world_max_x: f64,
    world_max_y: f64,
    font: Option<&Font>,
) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        let value = t as f64 * world_max_x;
        let label = format_axis_value(value, world_max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            bottom + 22.0,
            tick_font_size,
            AXIS,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        let value = t as f64 * world_max_y;
        let label = format_axis_value(value, world_max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            AXIS,
            font,
        );
    }

    draw_ui_text("Distance (m)", right - 130.0, bottom + 46.0, 18, AXIS, font);
    draw_ui_text("Height (m)", left + 10.0, top - 8.0, 18, AXIS, font);
}

pub(crate) fn draw_path(
    points: &[(f64, f64)],
    world_max_x: f64,
    world_max_y: f64,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let mut prev = world_to_screen(
        points[0],
        world_max_x,
        world_max_y,
        left,
        right,
        top,
        bottom,
    );
    for point in points.iter().skip(1).copied() {
        let cur = world_to_screen(point, world_max_x, world_max_y, left, right, top, bottom);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_hud(
    playbacks: &[Playback],
    paused: bool,
    left: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_ui_text(
        "Projectile Motion Simulator",
        left,
        TITLE_Y,
        30,
        HUD_TEXT,
        font,
    );
    draw_ui_text(
        if paused {
            "Controls: Space resume | R restart | Esc quit  [Paused]"
        } else {
            "Controls: Space pause | R restart | Esc quit"
        },
        left,
        CONTROLS_Y,
        20,
        AXIS,
        font,
    );

    for (i, playback) in playbacks.iter().enumerate() {
        let (x, y) = playback.current().unwrap_or((0.0, 0.0));
        let status = if playback.finished() { "landed" } else { "flying" };
        let line = format!(
            "{:<5} t = {:>6.2} s | pos = ({:>7.1}, {:>6.1}) m | v = {:>6.2} m/s | \
             T = {:.2} s, R = {:.1} m, H = {:.1} m [{}]",
            playback.scenario.name,
            playback.elapsed_s(),
            x,
            y,
            playback.current_speed(),
            playback.engine.time_of_flight(),
            playback.engine.range(),
            playback.engine.hmax(),
            status,
        );
        draw_ui_text(
            &line,
            left,
            screen_h - 52.0 + (i as f32 * 26.0),
            18,
            playback.scenario.trace_color,
            font,
        );
    }
}
