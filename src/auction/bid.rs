use super::Amount;
use std::{fmt, sync::Arc};

/// A bidder identity
///
/// Bids keep a shared reference to the `Person` who placed them, so "the
/// same bidder" means the same `Arc<Person>`, not an equal name.
#[derive(Debug)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn new_shared(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An offer of `value` for a lot, made by `bidder`
#[derive(Clone, Debug)]
pub struct Bid {
    bidder: Arc<Person>,
    value: Amount,
}

impl Bid {
    pub fn new(bidder: Arc<Person>, value: Amount) -> Self {
        Self { bidder, value }
    }

    pub fn bidder(&self) -> &Arc<Person> {
        &self.bidder
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn is_by(&self, person: &Arc<Person>) -> bool {
        Arc::ptr_eq(&self.bidder, person)
    }

    pub(crate) fn is_outbid_by(&self, value: Amount) -> bool {
        self.value < value
    }
}
