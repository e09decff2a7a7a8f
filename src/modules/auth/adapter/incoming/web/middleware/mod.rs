mod session_gate;

pub use session_gate::admin_session_gate;
