//! Last-write-wins bookkeeping for controller fetches.

use std::cell::Cell;

/// Identifies one issued fetch. Tokens increase monotonically per
/// [`FetchSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

impl FetchToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Tracks the most recently issued fetch of one controller.
///
/// A completion may only be applied if its token is still the latest and the
/// owning view has not been torn down.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: Cell<u64>,
    disposed: Cell<bool>,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every earlier one.
    pub fn next(&self) -> FetchToken {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        FetchToken(token)
    }

    pub fn latest(&self) -> FetchToken {
        FetchToken(self.latest.get())
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        !self.disposed.get() && token.0 == self.latest.get()
    }

    /// Invalidate all outstanding tokens permanently.
    pub fn dispose(&self) {
        self.disposed.set(true);
        self.next();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}
