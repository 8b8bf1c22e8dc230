/// Sound cues: procedural chiptune effects via rodio.
///
/// Each `GameEvent` maps to one `Cue`. Every cue is rendered once
/// at start-up into an in-memory WAV buffer and played fire-and-forget.
///
/// Without the `sound` feature `SoundEngine` is a stub that plays nothing.

use crate::sim::event::GameEvent;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cue {
    Coin,
    Loss,
    Star,
    Pickup,
    Fire,
    Hit,
    Bowser,
    Boo,
    Bank,
    Splat,
    Warp,
    Finish,
}

impl Cue {
    pub const ALL: [Cue; 12] = [
        Cue::Coin, Cue::Loss, Cue::Star, Cue::Pickup, Cue::Fire, Cue::Hit,
        Cue::Bowser, Cue::Boo, Cue::Bank, Cue::Splat, Cue::Warp, Cue::Finish,
    ];

    pub fn for_event(event: &GameEvent) -> Cue {
        match event {
            GameEvent::CoinsGiven { .. } => Cue::Coin,
            GameEvent::CoinsTaken { .. } | GameEvent::DroppingActivated { .. } => Cue::Loss,
            GameEvent::StarGiven { .. } => Cue::Star,
            GameEvent::VortexGiven { .. } => Cue::Pickup,
            GameEvent::VortexFired { .. } => Cue::Fire,
            GameEvent::VortexHit { .. } => Cue::Hit,
            GameEvent::BowserActivated { .. } => Cue::Bowser,
            GameEvent::BooActivated { .. } => Cue::Boo,
            GameEvent::BankWithdraw { .. } | GameEvent::BankDeposit { .. } => Cue::Bank,
            GameEvent::DroppingCreated { .. } => Cue::Splat,
            GameEvent::Teleported { .. } => Cue::Warp,
            GameEvent::GameFinished { .. } => Cue::Finish,
        }
    }
}

#[cfg(feature = "sound")]
mod inner {
    use std::collections::HashMap;
    use std::f32::consts::TAU;
    use std::io::Cursor;
    use std::sync::Arc;

    use log::warn;
    use rodio::{OutputStream, OutputStreamHandle, Sink};

    use super::Cue;

    const SAMPLE_RATE: u32 = 22050;

    pub struct SoundEngine {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        buffers: HashMap<Cue, Arc<Vec<u8>>>,
    }

    impl SoundEngine {
        pub fn new() -> Option<Self> {
            let (stream, handle) = match OutputStream::try_default() {
                Ok(pair) => pair,
                Err(e) => {
                    warn!("audio output unavailable: {e}");
                    return None;
                }
            };
            let buffers = Cue::ALL.iter()
                .map(|&cue| (cue, Arc::new(make_wav(&render(cue)))))
                .collect();
            Some(SoundEngine { _stream: stream, handle, buffers })
        }

        pub fn play(&self, cue: Cue) {
            let Some(buf) = self.buffers.get(&cue) else { return };
            if let Ok(sink) = Sink::try_new(&self.handle) {
                if let Ok(src) = rodio::Decoder::new(Cursor::new(buf.as_ref().clone())) {
                    sink.append(src);
                    sink.detach();
                }
            }
        }
    }

    // ════════════════════════════════════════════════════════════
    //  Waveforms
    // ════════════════════════════════════════════════════════════

    fn render(cue: Cue) -> Vec<f32> {
        match cue {
            Cue::Coin => notes(&[(1319.0, 0.04), (1976.0, 0.08)], 0.25),
            Cue::Loss => notes(&[(494.0, 0.06), (392.0, 0.06), (330.0, 0.10)], 0.25),
            Cue::Star => notes(&[(523.0, 0.08), (659.0, 0.08), (784.0, 0.08), (1047.0, 0.25)], 0.3),
            Cue::Pickup => notes(&[(784.0, 0.05), (1047.0, 0.05), (1568.0, 0.10)], 0.25),
            Cue::Fire => sweep(900.0, 300.0, 0.12, 0.0),
            Cue::Hit => sweep(300.0, 80.0, 0.18, 0.6),
            Cue::Bowser => notes(&[(110.0, 0.15), (104.0, 0.15), (98.0, 0.30)], 0.35),
            Cue::Boo => sweep(700.0, 500.0, 0.30, 0.1),
            Cue::Bank => notes(&[(988.0, 0.05), (988.0, 0.05), (1319.0, 0.12)], 0.2),
            Cue::Splat => sweep(200.0, 60.0, 0.15, 0.8),
            Cue::Warp => sweep(200.0, 1600.0, 0.25, 0.0),
            Cue::Finish => notes(
                &[(523.0, 0.12), (523.0, 0.12), (784.0, 0.12), (1047.0, 0.40)],
                0.3,
            ),
        }
    }

    /// Note sequence with a 3rd harmonic for a square-ish tone.
    fn notes(seq: &[(f32, f32)], volume: f32) -> Vec<f32> {
        let mut samples = Vec::new();
        for &(freq, dur) in seq {
            let n = (SAMPLE_RATE as f32 * dur) as usize;
            for i in 0..n {
                let t = i as f32 / SAMPLE_RATE as f32;
                let env = 1.0 - (i as f32 / n as f32).powf(0.5);
                let wave = (t * freq * TAU).sin() * 0.7 + (t * freq * 3.0 * TAU).sin() * 0.3;
                samples.push(wave * env * volume);
            }
        }
        samples
    }

    /// Pitch glide from `from` to `to` Hz, mixed with `noise` (0..1) of LCG noise.
    fn sweep(from: f32, to: f32, duration: f32, noise: f32) -> Vec<f32> {
        let n = (SAMPLE_RATE as f32 * duration) as usize;
        let mut rng: u32 = 0x2545_f491;
        let mut phase = 0.0_f32;
        (0..n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let freq = from + (to - from) * t;
                phase += freq * TAU / SAMPLE_RATE as f32;
                rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
                let hiss = (rng as f32 / u32::MAX as f32) * 2.0 - 1.0;
                let env = (1.0 - t).powf(0.7);
                (phase.sin() * (1.0 - noise) + hiss * noise) * env * 0.3
            })
            .collect()
    }

    // ════════════════════════════════════════════════════════════
    //  WAV encoder (16-bit mono PCM)
    // ════════════════════════════════════════════════════════════

    fn make_wav(samples: &[f32]) -> Vec<u8> {
        let data_size = samples.len() as u32 * 2;
        let mut buf = Vec::with_capacity(44 + data_size as usize);

        buf.extend_from_slice(b"RIFF");
        buf.extend_from_slice(&(36 + data_size).to_le_bytes());
        buf.extend_from_slice(b"WAVE");

        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&16u32.to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
        buf.extend_from_slice(&1u16.to_le_bytes()); // mono
        buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        buf.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
        buf.extend_from_slice(&2u16.to_le_bytes());
        buf.extend_from_slice(&16u16.to_le_bytes());

        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&data_size.to_le_bytes());
        for &s in samples {
            let val = (s.clamp(-1.0, 1.0) * 32767.0) as i16;
            buf.extend_from_slice(&val.to_le_bytes());
        }
        buf
    }

}

// ════════════════════════════════════════════════════════════
//  Public API
// ════════════════════════════════════════════════════════════

#[cfg(feature = "sound")]
pub use inner::SoundEngine;

#[cfg(not(feature = "sound"))]
pub struct SoundEngine;

#[cfg(not(feature = "sound"))]
impl SoundEngine {
    pub fn new() -> Option<Self> { Some(SoundEngine) }
    pub fn play(&self, _cue: Cue) {}
}

/// Play the cue for every event of one tick.
pub fn play_events(sound: Option<&SoundEngine>, events: &[GameEvent]) {
    let Some(sfx) = sound else { return };
    for cue in events.iter().map(Cue::for_event) {
        sfx.play(cue);
    }
}
