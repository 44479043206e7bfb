//! Canvas rendering for one oscilloscope screen.

use crate::dsp::scope::{AxisBounds, GlowLevel, ScopeDisplay};
use crate::ui::theme::{self, phosphor};
use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::container;
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};
use rand::Rng;

const NOISE_POINTS: usize = 200;
const NOISE_SIGMA: f32 = 0.01;

/// Cosmetic static for the idle-screen look. Resampled on the noise tick,
/// independent of the signal pipeline.
#[derive(Debug, Clone)]
pub struct NoiseOverlay {
    values: Vec<f32>,
}

impl NoiseOverlay {
    pub fn new() -> Self {
        let mut overlay = Self {
            values: vec![0.0; NOISE_POINTS],
        };
        overlay.resample();
        overlay
    }

    /// Draws fresh ~N(0, 0.01) jitter via the Irwin-Hall sum of uniforms.
    pub fn resample(&mut self) {
        let mut rng = rand::rng();
        for value in &mut self.values {
            let gaussian: f32 = (0..12).map(|_| rng.random::<f32>()).sum::<f32>() - 6.0;
            *value = gaussian * NOISE_SIGMA;
        }
    }
}

pub fn widget<'a, M: 'a>(scope: &'a ScopeDisplay, noise: &'a NoiseOverlay) -> Element<'a, M> {
    container(
        Canvas::new(ScopeView { scope, noise })
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .style(theme::screen_container)
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(2)
    .into()
}

struct ScopeView<'a> {
    scope: &'a ScopeDisplay,
    noise: &'a NoiseOverlay,
}

impl ScopeView<'_> {
    fn to_screen(bounds: AxisBounds, size: Size, x: f64, y: f64) -> Point {
        let fx = ((x - bounds.x_min) / (bounds.x_max - bounds.x_min)) as f32;
        let fy = ((y - bounds.y_min) / (bounds.y_max - bounds.y_min)) as f32;
        Point::new(fx * size.width, (1.0 - fy) * size.height)
    }

    fn stroke_for(level: GlowLevel) -> Stroke<'static> {
        let (color, width) = match level {
            GlowLevel::Beam => (phosphor::BEAM, phosphor::BEAM_WIDTH),
            GlowLevel::Glow => (phosphor::GLOW, phosphor::GLOW_WIDTH),
            GlowLevel::Halo => (phosphor::HALO, phosphor::HALO_WIDTH),
        };
        Stroke::default().with_color(color).with_width(width)
    }

    fn draw_traces(&self, frame: &mut Frame, size: Size) {
        let bounds = self.scope.bounds();
        let layers: Vec<_> = self.scope.trace_layers().collect();
        // Faint layers first so the beam stays on top.
        for (level, buffer) in layers.into_iter().rev() {
            if buffer.len() < 2 {
                continue;
            }
            let path = Path::new(|b| {
                b.move_to(Self::to_screen(bounds, size, buffer.time[0], buffer.values[0]));
                for i in 1..buffer.len() {
                    b.line_to(Self::to_screen(bounds, size, buffer.time[i], buffer.values[i]));
                }
            });
            frame.stroke(&path, Self::stroke_for(level));
        }
    }

    fn draw_trail(&self, frame: &mut Frame, size: Size) {
        let bounds = self.scope.bounds();
        let points: Vec<Point> = self
            .scope
            .trail()
            .map(|(x, y)| Self::to_screen(bounds, size, x, y))
            .collect();

        // Segment alpha ramps toward the newest point.
        for (i, pair) in points.windows(2).enumerate() {
            let age = (i + 1) as f32 / points.len() as f32;
            let segment = Path::line(pair[0], pair[1]);
            let stroke = Stroke::default()
                .with_color(theme::with_alpha(phosphor::BEAM, 0.05 + 0.45 * age))
                .with_width(1.5);
            frame.stroke(&segment, stroke);
        }

        if let Some((x, y)) = self.scope.latest_point() {
            let center = Self::to_screen(bounds, size, x, y);
            frame.fill(
                &Path::circle(center, phosphor::DOT_RADIUS * 2.5),
                phosphor::GLOW,
            );
            frame.fill(&Path::circle(center, phosphor::DOT_RADIUS), phosphor::BEAM);
        }
    }

    fn draw_noise(&self, frame: &mut Frame, size: Size) {
        let step = size.width / (NOISE_POINTS - 1) as f32;
        let path = Path::new(|b| {
            for (i, &n) in self.noise.values.iter().enumerate() {
                let point = Point::new(i as f32 * step, (0.5 - n / 4.0) * size.height);
                if i == 0 {
                    b.move_to(point);
                } else {
                    b.line_to(point);
                }
            }
        });
        frame.stroke(
            &path,
            Stroke::default().with_color(phosphor::NOISE).with_width(1.0),
        );
    }
}

impl<Message> canvas::Program<Message> for ScopeView<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        frame.fill_rectangle(Point::ORIGIN, size, phosphor::SCREEN_BG);
        self.draw_traces(&mut frame, size);
        self.draw_trail(&mut frame, size);
        self.draw_noise(&mut frame, size);
        // Vignette wash over everything, as on the original CRT look.
        frame.fill_rectangle(Point::ORIGIN, size, phosphor::VIGNETTE);

        vec![frame.into_geometry()]
    }
}
