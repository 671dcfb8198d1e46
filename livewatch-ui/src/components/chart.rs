//! Chart Components
//!
//! Query-share doughnut and scan-history line chart on HTML5 Canvas.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use livewatch::render::{QuerySlice, ScanPoint};

use crate::state::global::use_ui;

/// Line chart margins: left, right, top, bottom
const MARGIN: (f64, f64, f64, f64) = (40.0, 20.0, 20.0, 40.0);

/// Start and end angle of each slice, clockwise from twelve o'clock
pub fn slice_angles(slices: &[QuerySlice]) -> Vec<(f64, f64)> {
    let total: u64 = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = -PI / 2.0;
    slices
        .iter()
        .map(|s| {
            let end = start + (s.count as f64 / total as f64) * 2.0 * PI;
            let arc = (start, end);
            start = end;
            arc
        })
        .collect()
}

/// Canvas coordinates of each scan point. The y axis runs from 0 to `max`.
pub fn line_points(series: &[ScanPoint], max: u64, width: f64, height: f64) -> Vec<(f64, f64)> {
    let (left, right, top, bottom) = MARGIN;
    let chart_width = width - left - right;
    let chart_height = height - top - bottom;
    let max = max.max(1) as f64;
    let step = if series.len() > 1 {
        chart_width / (series.len() - 1) as f64
    } else {
        0.0
    };

    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if series.len() == 1 {
                left + chart_width / 2.0
            } else {
                left + i as f64 * step
            };
            let y = top + (1.0 - p.streamers_found as f64 / max) * chart_height;
            (x, y)
        })
        .collect()
}

fn context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Streamers per query as a doughnut
#[component]
pub fn QueryChart() -> impl IntoView {
    let ui = use_ui();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever statistics change
    create_effect(move |_| {
        let slices = ui.stats.with(|s| s.as_ref().map(|s| s.query_share.clone()).unwrap_or_default());
        if let Some(canvas) = canvas_ref.get() {
            draw_doughnut(&canvas, &slices);
        }
    });

    view! {
        <div class="relative">
            <canvas node_ref=canvas_ref width="300" height="300" class="mx-auto" />
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || ui.stats.with(|s| {
                    s.as_ref().map(|s| s.query_share.clone()).unwrap_or_default()
                        .into_iter()
                        .map(|slice| view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", slice.color)
                                />
                                <span class="text-sm text-gray-300">{format!("{} ({})", slice.query, slice.count)}</span>
                            </div>
                        })
                        .collect_view()
                })}
            </div>
        </div>
    }
}

/// Streamers found per scan, oldest to newest
#[component]
pub fn ScanChart() -> impl IntoView {
    let ui = use_ui();
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let (series, max) = ui.stats.with(|s| {
            s.as_ref()
                .map(|s| (s.scan_series.clone(), s.scan_max()))
                .unwrap_or_else(|| (Vec::new(), 1))
        });
        if let Some(canvas) = canvas_ref.get() {
            draw_line(&canvas, &series, max);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="800" height="300" class="w-full h-64 rounded-lg" />
    }
}

fn draw_doughnut(canvas: &HtmlCanvasElement, slices: &[QuerySlice]) {
    let Some(ctx) = context(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let outer = width.min(height) / 2.0 - 10.0;
    let inner = outer * 0.55;

    ctx.clear_rect(0.0, 0.0, width, height);

    let arcs = slice_angles(slices);
    if arcs.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", cx - 28.0, cy);
        return;
    }

    for (slice, (start, end)) in slices.iter().zip(arcs) {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, outer, start, end);
        ctx.close_path();
        ctx.set_fill_style(&slice.color.into());
        ctx.fill();
    }

    // Punch the hole
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, inner, 0.0, 2.0 * PI);
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill();
}

fn draw_line(canvas: &HtmlCanvasElement, series: &[ScanPoint], max: u64) {
    let Some(ctx) = context(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (left, right, top, bottom) = MARGIN;
    let chart_height = height - top - bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines with y labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(left, y);
        ctx.line_to(width - right, y);
        ctx.stroke();

        let value = max as f64 * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    if series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No scans yet", width / 2.0 - 45.0, height / 2.0);
        return;
    }

    let points = line_points(series, max, width, height);

    ctx.set_stroke_style(&"#36A2EB".into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    // Points, failed scans in red, and x labels
    for (point, (x, y)) in series.iter().zip(&points) {
        let color = if point.success { "#36A2EB" } else { "#FF6384" };
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, 2.0 * PI);
        ctx.fill();

        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&point.label, x - 15.0, height - 10.0);
    }
}
