//! Preset panel: four load slots, four save slots, and the sum display's
//! wave/dot mode toggle.

use crate::dsp::scope::RenderMode;
use crate::model::{ControlEvent, ScopeTarget};
use crate::presets::SLOTS;
use crate::ui::theme;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

fn slot_row<'a>(on_press: impl Fn(u8) -> ControlEvent) -> Element<'a, ControlEvent> {
    row(SLOTS.map(|slot| {
        button(text(slot.to_string()).size(12))
            .on_press(on_press(slot))
            .style(|theme, status| theme::toggle_button_style(theme, false, status))
            .width(Length::Fill)
            .padding(6)
            .into()
    }))
    .spacing(6)
    .into()
}

pub fn view(sum_mode: RenderMode) -> Element<'static, ControlEvent> {
    let modes = row([(RenderMode::Wave, "Waveform"), (RenderMode::Dot, "XY dot")].map(
        |(mode, label)| {
            let active = sum_mode == mode;
            button(text(label).size(12))
                .on_press(ControlEvent::SetRenderMode(ScopeTarget::Sum, mode))
                .style(move |theme, status| theme::toggle_button_style(theme, active, status))
                .width(Length::Fill)
                .padding(6)
                .into()
        },
    ))
    .spacing(6);

    let body = column![
        text("Presets").size(14),
        text("Load preset").size(12),
        slot_row(ControlEvent::LoadPreset),
        text("Save preset").size(12),
        slot_row(ControlEvent::SavePreset),
        text("Render mode (Sum)").size(12),
        modes,
    ]
    .spacing(10);

    container(body)
        .style(theme::panel_container)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(12)
        .into()
}
