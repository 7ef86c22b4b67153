// Random quote selection with recency exclusion
//
// Draws uniformly from the collection minus the quotes shown in the last
// 3 draws. When the exclusion would empty the eligible set (collections of
// 3 or fewer), eligibility reopens to everything except the quote on
// screen, so an advance always changes the display when it can; a single-
// quote collection redisplays its one quote.

use super::history::History;
use super::Quote;
use rand::Rng;

/// Pick the index of the next quote to show.
///
/// Returns `None` only for an empty collection; the app never calls the
/// selector in that state (it shows the placeholder instead). The caller
/// is responsible for recording the chosen id in `history`.
pub fn pick(quotes: &[Quote], history: &History, rng: &mut impl Rng) -> Option<usize> {
    if quotes.is_empty() {
        return None;
    }

    let eligible: Vec<usize> = (0..quotes.len())
        .filter(|&i| !history.is_recent(&quotes[i].id))
        .collect();

    if !eligible.is_empty() {
        return Some(eligible[rng.random_range(0..eligible.len())]);
    }

    // Exclusion emptied the set (collection of 3 or fewer). Reopen
    // everything except the quote currently on screen; with two quotes
    // this makes advancing a deterministic alternation.
    tracing::debug!("Recency exclusion emptied eligible set, falling back");
    let fallback: Vec<usize> = (0..quotes.len())
        .filter(|&i| Some(quotes[i].id.as_str()) != history.last())
        .collect();

    if fallback.is_empty() {
        // Single-quote collection: the one quote is all there is
        return Some(rng.random_range(0..quotes.len()));
    }

    Some(fallback[rng.random_range(0..fallback.len())])
}
