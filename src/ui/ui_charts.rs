use eframe::egui::Ui;
use egui_plot::{AxisHints, Bar, BarChart, Corner, GridMark, Legend, Line, Plot, PlotPoints};

use crate::domain::{MarkRow, PhoneRow};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::maths_utils::padded_range;

/// Bars of one phone sit either side of its slot.
const BAR_WIDTH: f64 = 0.35;

/// Category label for integer grid marks, nothing in between.
fn category_label(names: &[String], mark: GridMark) -> String {
    let idx = mark.value.round();
    if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

fn category_axis(names: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |mark, _range| category_label(&names, mark))
}

/// Two-series line chart of the weekly marks.
pub fn marks_chart(ui: &mut Ui, rows: &[MarkRow]) {
    let names: Vec<String> = rows.iter().map(|r| r.name.to_string()).collect();
    let series = |value: fn(&MarkRow) -> i32| -> Vec<[f64; 2]> {
        rows.iter()
            .enumerate()
            .map(|(i, r)| [i as f64, value(r) as f64])
            .collect()
    };
    let quiz = series(|r| r.quiz);
    let marks = series(|r| r.marks);

    let all_values: Vec<f64> = quiz.iter().chain(&marks).map(|p| p[1]).collect();
    let y_bounds = padded_range(&all_values, 0.1);

    Plot::new("marks_chart")
        .height(UI_CONFIG.layout.chart_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![category_axis(names)])
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            if let Some((lo, hi)) = y_bounds {
                plot_ui.set_plot_bounds_y(lo..=hi);
            }
            plot_ui.set_plot_bounds_x(-0.5..=(rows.len() as f64 - 0.5));
            plot_ui.line(
                Line::new(UI_TEXT.marks_series_quiz, PlotPoints::new(quiz))
                    .color(UI_CONFIG.colors.quiz_line)
                    .width(2.0),
            );
            plot_ui.line(
                Line::new(UI_TEXT.marks_series_marks, PlotPoints::new(marks))
                    .color(UI_CONFIG.colors.marks_line)
                    .width(2.0),
            );
        });
}

/// Grouped bars: price on the left of each phone, rating on the right.
///
/// Ratings are scaled into the price range so both series share an axis;
/// the hover text shows the real value.
pub fn phone_chart(ui: &mut Ui, rows: &[PhoneRow]) {
    let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
    let prices: Vec<f64> = rows.iter().map(|r| r.price as f64).collect();
    let top_price = padded_range(&prices, 0.0).map(|(_, hi)| hi).unwrap_or(1.0);
    let rating_scale = top_price / 5.0;

    let price_bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64 - BAR_WIDTH / 2.0, r.price as f64)
                .width(BAR_WIDTH)
                .name(format!("{}: ${}", r.name, r.price))
        })
        .collect();
    let rating_bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64 + BAR_WIDTH / 2.0, r.rating as f64 * rating_scale)
                .width(BAR_WIDTH)
                .name(format!("{}: {:.1}★", r.name, r.rating))
        })
        .collect();

    Plot::new("phone_chart")
        .height(UI_CONFIG.layout.chart_height)
        .legend(Legend::default().position(Corner::RightTop))
        .custom_x_axes(vec![category_axis(names)])
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(UI_TEXT.phones_series_price, price_bars)
                    .color(UI_CONFIG.colors.price_bar),
            );
            plot_ui.bar_chart(
                BarChart::new(UI_TEXT.phones_series_rating, rating_bars)
                    .color(UI_CONFIG.colors.rating_bar),
            );
        });
}
