//! Pages of the recipe book.
//!
//! Every page is a plain state machine: it decides what to fetch and how to
//! apply the fetched results, while running the fetches is left to the
//! caller.

pub mod catalog;
pub mod detail;
pub mod home;
pub mod login;

/// Counter of the fetches a page has started.
///
/// Only the result carrying the [`Ticket`] of the latest started fetch is
/// applied, so results superseded by a newer fetch are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Generation(u64);

impl Generation {
    /// Starts a new fetch, superseding all the previous ones.
    #[must_use]
    pub fn next(&mut self) -> Ticket {
        self.0 = self.0.wrapping_add(1);
        Ticket(self.0)
    }

    /// Supersedes all the started fetches without starting a new one.
    pub fn invalidate(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Indicates whether the provided [`Ticket`] belongs to the latest
    /// started fetch.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}

/// Mark of a fetch started by a [`Generation`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ticket(u64);
