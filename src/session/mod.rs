pub mod playback;
pub mod render_session;
