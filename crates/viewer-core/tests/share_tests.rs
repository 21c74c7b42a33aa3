// Host-side tests for the share-or-copy fallback chain.

use std::cell::RefCell;
use viewer_core::share::{LINK_COPIED_NOTICE, SHARE_FAILED_NOTICE};
use viewer_core::*;

struct FakeHost {
    share_ok: bool,
    clipboard_ok: bool,
    copied: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl FakeHost {
    fn new(share_ok: bool, clipboard_ok: bool) -> Self {
        Self {
            share_ok,
            clipboard_ok,
            copied: RefCell::default(),
            notices: RefCell::default(),
        }
    }
}

impl ShareHost for FakeHost {
    async fn native_share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        if self.share_ok {
            Ok(())
        } else {
            Err(ShareError::Unsupported)
        }
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        if self.clipboard_ok {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        } else {
            Err(ShareError::Rejected("permission denied".into()))
        }
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

fn request() -> ShareRequest {
    ShareRequest {
        url: "https://example.test/viewer".into(),
        title: "3D Viewer".into(),
        text: "Have a look".into(),
    }
}

#[test]
fn native_share_short_circuits() {
    let host = FakeHost::new(true, true);
    let outcome = pollster::block_on(share_or_copy(&host, &request()));
    assert_eq!(outcome, ShareOutcome::Shared);
    assert!(host.copied.borrow().is_empty());
    assert!(host.notices.borrow().is_empty());
}

#[test]
fn falls_back_to_clipboard_with_url() {
    let host = FakeHost::new(false, true);
    let outcome = pollster::block_on(share_or_copy(&host, &request()));
    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(*host.copied.borrow(), vec!["https://example.test/viewer".to_string()]);
    assert_eq!(*host.notices.borrow(), vec![LINK_COPIED_NOTICE.to_string()]);
}

#[test]
fn final_failure_is_a_notice_not_an_error() {
    let host = FakeHost::new(false, false);
    let outcome = pollster::block_on(share_or_copy(&host, &request()));
    assert_eq!(outcome, ShareOutcome::Notified);
    assert_eq!(*host.notices.borrow(), vec![SHARE_FAILED_NOTICE.to_string()]);
}
