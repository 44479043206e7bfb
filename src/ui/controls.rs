//! Per-channel control panel: amplitude/frequency sliders + shape buttons.
//!
//! Widgets are rebuilt from the model on every view pass, so the displayed
//! state always reflects the current parameters (the `refresh` contract).

use crate::dsp::generator::WaveformGenerator;
use crate::dsp::signal::WaveShape;
use crate::dsp::ChannelId;
use crate::model::ControlEvent;
use crate::ui::theme;
use iced::widget::{button, column, container, row, slider, text};
use iced::{Element, Length};

pub const AMPLITUDE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;
pub const FREQUENCY_RANGE: std::ops::RangeInclusive<f32> = 0.0..=20_000.0;

pub fn view(generator: &WaveformGenerator, channel: ChannelId) -> Element<'_, ControlEvent> {
    let params = generator.channel(channel);

    let amplitude = column![
        text(format!("Amplitude  {:.2}", params.amplitude)).size(12),
        slider(AMPLITUDE_RANGE, params.amplitude as f32, move |v| {
            ControlEvent::SetAmplitude(channel, f64::from(v))
        })
        .step(0.01)
        .style(theme::slider_style),
    ]
    .spacing(6);

    let frequency = column![
        text(format!("Frequency  {:.0} Hz", params.frequency)).size(12),
        slider(FREQUENCY_RANGE, params.frequency as f32, move |v| {
            ControlEvent::SetFrequency(channel, f64::from(v.round()))
        })
        .step(1.0)
        .style(theme::slider_style),
    ]
    .spacing(6);

    let shapes = row(WaveShape::ALL.map(|shape| {
        let active = params.shape == shape;
        button(text(shape.label()).size(12))
            .on_press(ControlEvent::SetWaveShape(channel, shape))
            .style(move |theme, status| theme::toggle_button_style(theme, active, status))
            .width(Length::Fill)
            .padding(6)
            .into()
    }))
    .spacing(6);

    let body = column![
        text(channel.label()).size(14),
        amplitude,
        frequency,
        text("Waveform").size(12),
        shapes,
    ]
    .spacing(10);

    container(body)
        .style(theme::panel_container)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(12)
        .into()
}
