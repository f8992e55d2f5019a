//! Single-slot holder for the user-facing error.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Submission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorRecord {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Submission,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorChannel {
    slot: Option<ErrorRecord>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ErrorRecord> {
        self.slot.as_ref()
    }

    /// Overwrites whatever was there
    pub fn set(&mut self, record: ErrorRecord) {
        self.slot = Some(record);
    }

    pub fn acknowledge(&mut self) -> Option<ErrorRecord> {
        self.slot.take()
    }

    /// Drop a submission error; a validation error stays until acknowledged
    pub fn supersede_submission(&mut self) {
        if matches!(&self.slot, Some(record) if record.kind == ErrorKind::Submission) {
            self.slot = None;
        }
    }

    /// An unacknowledged validation notice blocks the next submit
    pub fn blocks_submit(&self) -> bool {
        matches!(&self.slot, Some(record) if record.kind == ErrorKind::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slot_overwrites() {
        let mut channel = ErrorChannel::new();
        channel.set(ErrorRecord::validation("first"));
        channel.set(ErrorRecord::submission("second"));
        assert_eq!(channel.current(), Some(&ErrorRecord::submission("second")));
        assert_eq!(channel.acknowledge(), Some(ErrorRecord::submission("second")));
        assert_eq!(channel.current(), None);
    }

    #[test]
    fn test_supersede_keeps_validation() {
        let mut channel = ErrorChannel::new();
        channel.set(ErrorRecord::validation("select at least one item"));
        channel.supersede_submission();
        assert!(channel.blocks_submit());

        channel.set(ErrorRecord::submission("HTTP 500"));
        assert!(!channel.blocks_submit());
        channel.supersede_submission();
        assert_eq!(channel.current(), None);
    }
}
