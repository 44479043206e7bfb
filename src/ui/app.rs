//! Iced application shell wiring the scheduler ticks and control surface to
//! the model.

use crate::dsp::ChannelId;
use crate::model::{ControlEvent, Model, ScopeTarget};
use crate::scheduler::TickKind;
use crate::ui::scope_view::{self, NoiseOverlay};
use crate::ui::{controls, preset_panel, theme};
use iced::widget::{column, row};
use iced::{Element, Length, Result, Settings, Size, Subscription, Task, application};

const APP_SPACING: f32 = 12.0;

pub fn run(model: Model) -> Result {
    let settings = Settings {
        id: Some(String::from("wavescope-ui")),
        ..Settings::default()
    };

    application(move || App::new(model.clone()), update, view)
        .title("Wave Superposition")
        .settings(settings)
        .window_size(Size::new(1180.0, 640.0))
        .resizable(true)
        .theme(|_: &App| theme::theme())
        .subscription(subscription)
        .run()
}

struct App {
    model: Model,
    noise: [NoiseOverlay; 3],
}

#[derive(Debug, Clone)]
enum Message {
    Tick(TickKind),
    Control(ControlEvent),
}

impl App {
    fn new(model: Model) -> (Self, Task<Message>) {
        (
            Self {
                model,
                noise: std::array::from_fn(|_| NoiseOverlay::new()),
            },
            Task::none(),
        )
    }
}

fn subscription(_app: &App) -> Subscription<Message> {
    Subscription::batch(
        TickKind::ALL
            .map(|kind| {
                iced::time::every(kind.period())
                    .with(kind)
                    .map(|(kind, _)| Message::Tick(kind))
            }),
    )
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Tick(TickKind::Noise) => {
            for overlay in &mut app.noise {
                overlay.resample();
            }
        }
        // Repaint ticks redraw by arriving; the model ignores them.
        Message::Tick(kind) => app.model.advance(kind),
        Message::Control(event) => app.model.apply(event),
    }
    Task::none()
}

fn view(app: &App) -> Element<'_, Message> {
    let screens = row(ScopeTarget::ALL
        .iter()
        .zip(&app.noise)
        .map(|(&target, noise)| scope_view::widget(app.model.scope(target), noise)))
    .spacing(APP_SPACING)
    .width(Length::Fill)
    .height(Length::FillPortion(3));

    let panels = row![
        controls::view(app.model.generator(), ChannelId::One).map(Message::Control),
        controls::view(app.model.generator(), ChannelId::Two).map(Message::Control),
        preset_panel::view(app.model.sum_mode()).map(Message::Control),
    ]
    .spacing(APP_SPACING)
    .width(Length::Fill)
    .height(Length::FillPortion(1));

    column![screens, panels]
        .spacing(APP_SPACING)
        .padding(APP_SPACING)
        .into()
}
