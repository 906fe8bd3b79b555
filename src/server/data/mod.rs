//! Data access layer repositories.
//!
//! One repository per SQLite store: [`donation::DonationRepository`] over `donations.db` and
//! [`geocache::GeocacheRepository`] over `geocache.db`. Both are generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait) so callers can pass a connection or a
//! transaction.

pub mod donation;
pub mod geocache;

#[cfg(test)]
mod tests;
