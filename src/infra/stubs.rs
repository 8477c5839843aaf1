//! Test doubles for infra contracts.

use std::cell::RefCell;

use anyhow::Result;

use crate::infra::contracts::ExternalOpener;

#[derive(Debug, Clone, Default)]
pub struct NoopOpener;

impl ExternalOpener for NoopOpener {
    fn open(&self, _target: &str) -> Result<()> {
        Ok(())
    }
}

/// Captures every opened target; optionally fails each call.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        self.opened.borrow_mut().push(target.to_owned());
        if self.fail {
            anyhow::bail!("no handler for {target}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_opener_captures_targets() {
        let opener = RecordingOpener::default();

        opener.open("tel:02626410000").expect("open must succeed");

        assert_eq!(opener.opened.borrow().as_slice(), ["tel:02626410000"]);
    }

    #[test]
    fn failing_opener_still_records_target() {
        let opener = RecordingOpener {
            fail: true,
            ..RecordingOpener::default()
        };

        assert!(opener.open("https://example.com").is_err());
        assert_eq!(opener.opened.borrow().len(), 1);
    }
}
