use egui::{Color32, Context, CornerRadius, vec2};

pub const ACCENT: Color32 = Color32::from_rgb(220, 60, 70);
pub const NAV_IDLE: Color32 = Color32::from_rgb(34, 34, 42);
pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 150, 165);
pub const SUCCESS: Color32 = Color32::from_rgb(100, 220, 120);
pub const ERROR: Color32 = Color32::from_rgb(255, 95, 95);

pub fn apply_style(ctx: &Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.window_fill = Color32::from_rgb(18, 18, 22);
    style.visuals.panel_fill = Color32::from_rgb(22, 22, 28);
    style.visuals.extreme_bg_color = Color32::from_rgb(12, 12, 16);

    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(70, 44, 50);
    style.visuals.widgets.inactive.bg_fill = NAV_IDLE;

    let radius = CornerRadius::same(6);
    style.visuals.window_corner_radius = CornerRadius::same(8);
    for w in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        w.corner_radius = radius;
    }

    style.spacing.item_spacing = vec2(10.0, 10.0);
    style.spacing.button_padding = vec2(14.0, 6.0);

    ctx.set_style(style);
}
