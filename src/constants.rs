// Real-time frame rate
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS, one engine tick per frame
