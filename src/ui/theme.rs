//! Dark Iced theme plus the phosphor palette used by the scope canvases.

use iced::border::Border;
use iced::theme::palette::{self, Extended};
use iced::widget::{button, container, slider};
use iced::{Background, Color, Theme};

const BG_BASE: Color = Color::from_rgba(0.055, 0.070, 0.055, 1.0);
const TEXT_PRIMARY: Color = Color::from_rgba(0.880, 0.920, 0.880, 1.0);

const BORDER_SUBTLE: Color = Color::from_rgba(0.240, 0.300, 0.240, 1.0);
const BORDER_FOCUS: Color = Color::from_rgba(0.420, 0.560, 0.420, 1.0);

const ACCENT_PRIMARY: Color = Color::from_rgba(0.130, 0.200, 0.130, 1.0);
const ACCENT_SUCCESS: Color = Color::from_rgba(0.380, 0.600, 0.400, 1.0);
const ACCENT_DANGER: Color = Color::from_rgba(0.557, 0.380, 0.380, 1.0);

/// CRT screen palette. Alphas follow the classic three-layer phosphor look:
/// a bright beam over two wider, fainter afterglow strokes.
pub mod phosphor {
    use super::Color;

    pub const SCREEN_BG: Color = Color::from_rgba(0.0, 0.031, 0.0, 1.0);
    pub const BEAM: Color = Color::from_rgba(0.0, 1.0, 0.0, 1.0);
    pub const GLOW: Color = Color::from_rgba(0.0, 1.0, 0.0, 0.314);
    pub const HALO: Color = Color::from_rgba(0.0, 0.784, 0.0, 0.157);
    pub const NOISE: Color = Color::from_rgba(0.0, 1.0, 0.0, 0.078);
    pub const VIGNETTE: Color = Color::from_rgba(0.0, 0.078, 0.0, 0.588);

    pub const BEAM_WIDTH: f32 = 3.0;
    pub const GLOW_WIDTH: f32 = 10.0;
    pub const HALO_WIDTH: f32 = 18.0;
    pub const DOT_RADIUS: f32 = 4.0;
}

pub fn theme() -> Theme {
    Theme::custom_with_fn(
        "Wavescope Phosphor".to_string(),
        palette::Palette {
            background: BG_BASE,
            text: TEXT_PRIMARY,
            primary: ACCENT_PRIMARY,
            success: ACCENT_SUCCESS,
            warning: ACCENT_SUCCESS,
            danger: ACCENT_DANGER,
        },
        Extended::generate,
    )
}

// styling helpers

pub fn sharp_border() -> Border {
    Border {
        color: BORDER_SUBTLE,
        width: 1.0,
        radius: 0.0.into(),
    }
}

pub fn focus_border() -> Border {
    Border {
        color: BORDER_FOCUS,
        width: 1.0,
        radius: 0.0.into(),
    }
}

pub fn button_style(theme: &Theme, base: Color, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let mut style = button::Style {
        background: Some(Background::Color(base)),
        text_color: palette.background.base.text,
        border: sharp_border(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => {
            style.background = Some(Background::Color(palette::deviate(base, 0.05)));
        }
        button::Status::Pressed => {
            style.border = focus_border();
        }
        _ => {}
    }

    style
}

/// Checkable-button styling: the active option reads as pressed-in.
pub fn toggle_button_style(theme: &Theme, active: bool, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let mut base = if active {
        palette.success.weak.color
    } else {
        mix_colors(palette.background.base.color, Color::WHITE, 0.12)
    };
    base.a = 1.0;
    button_style(theme, base, status)
}

pub fn panel_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        border: sharp_border(),
        ..Default::default()
    }
}

pub fn screen_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(phosphor::SCREEN_BG)),
        border: sharp_border(),
        ..Default::default()
    }
}

pub fn slider_style(theme: &Theme, status: slider::Status) -> slider::Style {
    let palette = theme.extended_palette();

    let track = mix_colors(palette.background.base.color, Color::WHITE, 0.16);
    let filled = mix_colors(palette.success.base.color, Color::BLACK, 0.25);

    let border_color = match status {
        slider::Status::Hovered | slider::Status::Dragged => BORDER_FOCUS,
        _ => BORDER_SUBTLE,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (Background::Color(filled), Background::Color(track)),
            border: sharp_border(),
            width: 2.0,
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 7.0 },
            background: Background::Color(filled),
            border_color,
            border_width: 1.0,
        },
    }
}

pub fn mix_colors(a: Color, b: Color, factor: f32) -> Color {
    let t = factor.clamp(0.0, 1.0);
    Color::from_rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}
