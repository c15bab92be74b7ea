use dioxus::prelude::*;

use crate::model::auth::TokenDto;

/// Admin bearer token held for the lifetime of the tab.
#[derive(Clone, Copy)]
pub struct AdminSession {
    inner: Signal<Option<TokenDto>>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|t| t.token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().is_some()
    }

    pub fn set(&mut self, token: TokenDto) {
        self.inner.set(Some(token));
    }

    pub fn clear(&mut self) {
        self.inner.set(None);
    }
}
