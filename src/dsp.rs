pub mod generator;
pub mod scope;
pub mod signal;

/// One of the two independent waveform sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    One,
    Two,
}

impl ChannelId {
    pub const ALL: [ChannelId; 2] = [ChannelId::One, ChannelId::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            ChannelId::One => 0,
            ChannelId::Two => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChannelId::One => "Wave 1",
            ChannelId::Two => "Wave 2",
        }
    }
}

/// One generated trace: parallel time/value arrays of equal length,
/// regenerated wholesale every tick and never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    pub time: Vec<f64>,
    pub values: Vec<f64>,
}

impl SampleBuffer {
    pub fn new(time: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(time.len(), values.len());
        Self { time, values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
