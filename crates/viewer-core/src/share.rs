//! Share-or-copy with a two-tier fallback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("not supported on this platform")]
    Unsupported,
    #[error("rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRequest {
    pub url: String,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    /// Both paths failed and the user was shown a notice.
    Notified,
}

/// Platform share/clipboard surface. Calls may complete late and may fail.
#[allow(async_fn_in_trait)]
pub trait ShareHost {
    async fn native_share(&self, request: &ShareRequest) -> Result<(), ShareError>;
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
    fn notify(&self, message: &str);
}

pub const SHARE_FAILED_NOTICE: &str = "Sharing is not available. Copy the address bar link instead.";
pub const LINK_COPIED_NOTICE: &str = "Link copied to clipboard";

/// Try native share, then clipboard, then a visible notice. Never fails.
pub async fn share_or_copy<H: ShareHost>(host: &H, request: &ShareRequest) -> ShareOutcome {
    match host.native_share(request).await {
        Ok(()) => return ShareOutcome::Shared,
        Err(e) => log::info!("[share] native share unavailable: {}", e),
    }
    match host.copy_to_clipboard(&request.url).await {
        Ok(()) => {
            host.notify(LINK_COPIED_NOTICE);
            ShareOutcome::Copied
        }
        Err(e) => {
            log::warn!("[share] clipboard fallback failed: {}", e);
            host.notify(SHARE_FAILED_NOTICE);
            ShareOutcome::Notified
        }
    }
}
