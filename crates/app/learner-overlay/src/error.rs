use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Window error: {0}")]
    Window(String),

    #[error("Failed to emit {event}: {message}")]
    Emit {
        event: &'static str,
        message: String,
    },
}

impl OverlayError {
    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }

    pub fn emit(event: &'static str, msg: impl Into<String>) -> Self {
        Self::Emit {
            event,
            message: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OverlayError::window("not visible").to_string(),
            "Window error: not visible"
        );
        assert_eq!(
            OverlayError::emit("screenshot-triggered", "closed").to_string(),
            "Failed to emit screenshot-triggered: closed"
        );
    }
}
