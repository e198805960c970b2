mod pcm;
mod player;

pub use pcm::PcmBuffer;
#[cfg(feature = "audio")]
pub use player::DeviceSink;
pub use player::{build_sink, AudioError, AudioSink, NullSink};
