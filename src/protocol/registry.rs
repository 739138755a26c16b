//! Command dispatch: an ordered table of (selector, schema) alternatives.
//!
//! Decoding resolves a schema from the header's command code and request
//! bit by evaluating selectors in registration order — the first match
//! wins. Exact selectors test code and direction; wildcard selectors test
//! direction only and exist so unknown commands degrade to a generic
//! schema instead of a decode error. A wildcard registered before an exact
//! selector would shadow it, so [`RegistryBuilder::build`] rejects that
//! ordering outright rather than trusting convention.

use std::sync::Arc;

use tracing::trace;

use crate::error::{ProtocolError, Result};
use crate::protocol::schema::MessageSchema;

/// Predicate over the (command code, request bit) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSelector {
    /// Matches one command code in one direction.
    Exact { code: u32, request: bool },
    /// Matches any command with the request bit set.
    AnyRequest,
    /// Matches any command with the request bit clear.
    AnyAnswer,
}

impl MessageSelector {
    #[inline]
    pub fn matches(&self, code: u32, request: bool) -> bool {
        match *self {
            MessageSelector::Exact {
                code: want,
                request: direction,
            } => code == want && request == direction,
            MessageSelector::AnyRequest => request,
            MessageSelector::AnyAnswer => !request,
        }
    }

    #[inline]
    fn is_wildcard(&self) -> bool {
        !matches!(self, MessageSelector::Exact { .. })
    }
}

/// Immutable, ordered dispatch table. Built once, shared freely.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(MessageSelector, Arc<MessageSchema>)>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// First registered schema whose selector accepts `(code, request)`.
    pub fn resolve(&self, code: u32, request: bool) -> Option<&Arc<MessageSchema>> {
        let found = self
            .entries
            .iter()
            .find(|(selector, _)| selector.matches(code, request))
            .map(|(_, schema)| schema);
        if let Some(schema) = found {
            trace!(code, request, schema = schema.name, "resolved command");
        }
        found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates alternatives in registration order.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<(MessageSelector, Arc<MessageSchema>)>,
}

impl RegistryBuilder {
    /// Registers an exact alternative using the schema's own command
    /// identity.
    pub fn message(mut self, schema: &Arc<MessageSchema>) -> Self {
        self.entries.push((
            MessageSelector::Exact {
                code: schema.code,
                request: schema.request,
            },
            schema.clone(),
        ));
        self
    }

    /// Registers the fallback for requests with unrecognized command codes.
    pub fn any_request(mut self, schema: &Arc<MessageSchema>) -> Self {
        self.entries
            .push((MessageSelector::AnyRequest, schema.clone()));
        self
    }

    /// Registers the fallback for answers with unrecognized command codes.
    pub fn any_answer(mut self, schema: &Arc<MessageSchema>) -> Self {
        self.entries
            .push((MessageSelector::AnyAnswer, schema.clone()));
        self
    }

    /// Finalizes the table, rejecting any exact selector registered after a
    /// wildcard — in that position it could never win against the wildcard.
    pub fn build(self) -> Result<Registry> {
        let mut wildcard_seen = false;
        for (selector, _) in &self.entries {
            if selector.is_wildcard() {
                wildcard_seen = true;
            } else if wildcard_seen {
                return Err(ProtocolError::InvalidRegistry(
                    "exact selectors must be registered before wildcards",
                ));
            }
        }
        Ok(Registry {
            entries: self.entries,
        })
    }
}
