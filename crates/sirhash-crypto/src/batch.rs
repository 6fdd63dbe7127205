// Parallel hashing of independent messages

use rayon::prelude::*;

use crate::error::Result;
use crate::hash::hash;
use crate::types::Digest;

/// Hashes each message independently on the rayon thread pool.
///
/// Messages share no state, so every worker runs its own pipeline. Results
/// come back in input order; if several messages fail, the error for the
/// earliest one is returned.
pub fn hash_all<M>(messages: &[M]) -> Result<Vec<Digest>>
where
    M: AsRef<[u8]> + Sync,
{
    tracing::debug!(
        messages = messages.len(),
        threads = rayon::current_num_threads(),
        "hashing batch"
    );

    let results: Vec<Result<Digest>> = messages
        .par_iter()
        .map(|m| hash(m.as_ref()))
        .collect();

    results.into_iter().collect()
}
