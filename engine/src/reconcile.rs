//! Conversation list reconciliation.
//!
//! Given the current ordered conversation list and one updated conversation,
//! this produces the next state snapshot. It is invoked once per update
//! event, typically when a new message lands on a thread.
//!
//! # Algorithm
//!
//! 1. Forward linear scan for an entry with the updated conversation's id
//! 2. Hit at index i: clone the list, entry i takes the updated messages
//! 3. Miss: clone the list and append the updated conversation last
//!
//! The matching entry's messages are replaced wholesale, never merged.
//! Messages present in the old entry but absent from the update are gone
//! from the result.

use crate::Conversation;

/// Fold one updated conversation into the list.
///
/// Pure: the input list is never mutated or retained, and the returned list
/// never aliases the input container. Output length is `conversations.len()`
/// when the id matches an entry, `conversations.len() + 1` otherwise.
/// Relative order of untouched entries is preserved.
///
/// Duplicate ids in the input are malformed but tolerated: the first
/// occurrence wins.
pub fn reconcile(conversations: &[Conversation], updated: Conversation) -> Vec<Conversation> {
    let mut next = conversations.to_vec();

    match next.iter().position(|c| c.id == updated.id) {
        Some(index) => next[index].messages = updated.messages,
        None => next.push(updated),
    }

    next
}
